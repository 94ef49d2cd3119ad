use crate::ast;
use crate::NameConverter;
use crate::ScalarsMap;

const LIST_MARKER: &str = "[]";
const OPTIONAL_MARKER: &str = "*";

/// Wraps `base` in one Go slice marker per list level of `type_ref`.
///
/// Non-null wrappers contribute nothing: nullability is expressed by the
/// caller on `base` (see [`optional`]) before wrapping.
pub fn wrap_ast_type_with_modifiers(base: &str, type_ref: &ast::Type) -> String {
    match type_ref {
        ast::Type::NonNullType(inner) => wrap_ast_type_with_modifiers(base, inner),
        ast::Type::ListType(inner) =>
            format!("{LIST_MARKER}{}", wrap_ast_type_with_modifiers(base, inner)),
        ast::Type::NamedType(_) => base.to_string(),
    }
}

/// Prefixes `base` with Go's pointer marker.
pub fn optional(base: &str) -> String {
    format!("{OPTIONAL_MARKER}{base}")
}

/// The innermost named type of a (possibly wrapped) type reference.
pub fn base_type_name(type_ref: &ast::Type) -> &str {
    match type_ref {
        ast::Type::NonNullType(inner)
        | ast::Type::ListType(inner) => base_type_name(inner),
        ast::Type::NamedType(name) => name.as_str(),
    }
}

/// Whether the outermost wrapper of `type_ref` is non-null.
pub fn is_non_null(type_ref: &ast::Type) -> bool {
    matches!(type_ref, ast::Type::NonNullType(_))
}

pub fn is_list(type_ref: &ast::Type) -> bool {
    match type_ref {
        ast::Type::NonNullType(inner) => is_list(inner),
        ast::Type::ListType(_) => true,
        ast::Type::NamedType(_) => false,
    }
}

/// Whether the named type at the bottom of `type_ref` is nullable, e.g.
/// `[String]!` is innermost-nullable but `[String!]` is not.
pub fn is_innermost_nullable(type_ref: &ast::Type) -> bool {
    match type_ref {
        ast::Type::NonNullType(inner) => match inner.as_ref() {
            ast::Type::NamedType(_) => false,
            other => is_innermost_nullable(other),
        },
        ast::Type::ListType(inner) => is_innermost_nullable(inner),
        ast::Type::NamedType(_) => true,
    }
}

pub fn list_depth(type_ref: &ast::Type) -> usize {
    match type_ref {
        ast::Type::NonNullType(inner) => list_depth(inner),
        ast::Type::ListType(inner) => 1 + list_depth(inner),
        ast::Type::NamedType(_) => 0,
    }
}

/// How a scalar found in the [`ScalarsMap`] is referenced from generated
/// code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarReference {
    /// By the scalar's own GraphQL name. Used where every scalar is also
    /// emitted once as a named Go type (schema types output).
    DeclaredName,

    /// By the Go type the scalar maps to (operations output).
    GoType,
}

/// Resolves GraphQL type names to the Go type names generated code refers
/// to.
#[derive(Clone, Debug)]
pub struct TypeResolver<'a> {
    pub names: &'a NameConverter,
    pub namespaced_import_name: Option<&'a str>,
    pub scalar_reference: ScalarReference,
    pub scalars: &'a ScalarsMap,
}
impl<'a> TypeResolver<'a> {
    pub fn resolve(&self, type_name: &str) -> String {
        if let Some(go_type) = self.scalars.get(type_name) {
            return match self.scalar_reference {
                ScalarReference::DeclaredName => type_name.to_string(),
                ScalarReference::GoType => go_type.to_owned(),
            };
        }

        let converted = self.names.convert(type_name);
        match self.namespaced_import_name {
            Some(namespace) if !namespace.is_empty() => format!("{namespace}.{converted}"),
            _ => converted,
        }
    }

    /// Resolves `type_ref` for an output (non-input) position: the base gets
    /// a pointer when the innermost type is nullable, unless
    /// `avoid_optionals`.
    pub fn output_type(&self, type_ref: &ast::Type, avoid_optionals: bool) -> String {
        let base = self.resolve(base_type_name(type_ref));
        wrap_output_base(&base, type_ref, avoid_optionals)
    }
}

/// Applies the output-field nullability rule to an already resolved base and
/// then the list modifiers of `type_ref`.
pub(crate) fn wrap_output_base(
    base: &str,
    type_ref: &ast::Type,
    avoid_optionals: bool,
) -> String {
    if is_innermost_nullable(type_ref) && !avoid_optionals {
        wrap_ast_type_with_modifiers(&optional(base), type_ref)
    } else {
        wrap_ast_type_with_modifiers(base, type_ref)
    }
}
