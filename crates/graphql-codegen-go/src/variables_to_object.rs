use crate::ast;
use crate::comments;
use crate::modifiers;
use crate::naming::to_pascal_case;
use crate::TypeResolver;

/// Anything that declares a named, typed input slot: operation variables,
/// input object fields and field arguments.
pub trait VariableLike {
    fn name(&self) -> &str;
    fn type_ref(&self) -> &ast::Type;
    fn has_default_value(&self) -> bool;

    fn description(&self) -> Option<&str> {
        None
    }
}
impl VariableLike for ast::query::VariableDefinition {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn type_ref(&self) -> &ast::Type {
        &self.var_type
    }

    fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}
impl VariableLike for ast::schema::InputValue {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn type_ref(&self) -> &ast::Type {
        &self.value_type
    }

    fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Turns a list of variables (or input values) into the field lines of a Go
/// struct body.
#[derive(Clone, Debug)]
pub struct VariablesToObject<'a> {
    avoid_optionals: bool,
    resolver: TypeResolver<'a>,
}
impl<'a> VariablesToObject<'a> {
    pub fn new(resolver: TypeResolver<'a>, avoid_optionals: bool) -> Self {
        Self {
            avoid_optionals,
            resolver,
        }
    }

    /// Returns `None` for an empty list so callers can decide how an empty
    /// body should be rendered.
    pub fn transform<V: VariableLike>(&self, variables: &[V]) -> Option<String> {
        if variables.is_empty() {
            return None;
        }

        Some(
            variables.iter()
                .map(|variable| self.transform_variable(variable))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }

    /// Renders one indented field line, preceded by the variable's
    /// description as comments when it has one.
    pub fn transform_variable<V: VariableLike>(&self, variable: &V) -> String {
        let name = variable.name();
        let type_ref = variable.type_ref();
        let comment = comments::transform_comment(variable.description(), 1);
        let field_type = self.field_type(type_ref, variable.has_default_value());

        format!(
            "{comment}{}{} {field_type} `json:\"{name}\"`",
            comments::INDENT,
            to_pascal_case(name),
        )
    }

    fn field_type(&self, type_ref: &ast::Type, has_default_value: bool) -> String {
        let base = self.resolver.resolve(modifiers::base_type_name(type_ref));

        if modifiers::is_list(type_ref) {
            // A nil slice already models an absent list.
            return modifiers::wrap_output_base(&base, type_ref, self.avoid_optionals);
        }

        let is_optional =
            !modifiers::is_non_null(type_ref)
            && !has_default_value
            && !self.avoid_optionals;

        if is_optional {
            modifiers::optional(&base)
        } else {
            base
        }
    }
}
