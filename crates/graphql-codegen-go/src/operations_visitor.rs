use crate::ast;
use crate::modifiers::ScalarReference;
use crate::naming::ConvertNameOptions;
use crate::selection_set_to_object::SelectionSetOptions;
use crate::CodegenError;
use crate::DeclarationBlock;
use crate::DeclarationKind;
use crate::FragmentRegistry;
use crate::GoPluginConfig;
use crate::OperationKind;
use crate::ParsedGoConfig;
use crate::SchemaIndex;
use crate::SelectionSetToObject;
use crate::TypeResolver;
use crate::VariablesToObject;

type Result<T> = std::result::Result<T, CodegenError>;

/// Generates result and variables types for the fragments and named
/// operations of an executable document.
#[derive(Clone, Debug)]
pub struct OperationsVisitor<'a> {
    config: &'a GoPluginConfig,
    fragments: &'a FragmentRegistry,
    parsed: &'a ParsedGoConfig,
    schema: &'a SchemaIndex,
}
impl<'a> OperationsVisitor<'a> {
    pub fn new(
        schema: &'a SchemaIndex,
        config: &'a GoPluginConfig,
        parsed: &'a ParsedGoConfig,
        fragments: &'a FragmentRegistry,
    ) -> Self {
        Self {
            config,
            fragments,
            parsed,
            schema,
        }
    }

    fn resolver(&self) -> TypeResolver<'a> {
        TypeResolver {
            names: &self.parsed.names,
            namespaced_import_name: self.config.namespaced_import_name(),
            scalar_reference: ScalarReference::GoType,
            scalars: &self.parsed.scalars,
        }
    }

    fn selection_set_to_object(&self) -> SelectionSetToObject<'a> {
        SelectionSetToObject::new(
            self.schema,
            self.resolver(),
            self.fragments,
            SelectionSetOptions {
                add_typename: self.config.add_typename,
                avoid_optionals: self.config.avoid_optionals,
                namespaced_import_name: self.config.namespaced_import_name(),
                non_optional_typename: self.config.non_optional_typename,
            },
        )
    }

    pub fn visit_document(&self, doc: &ast::query::Document) -> Result<Vec<String>> {
        let mut definitions = vec![];
        for def in &doc.definitions {
            if let Some(definition) = self.visit_definition(def)? {
                definitions.push(definition);
            }
        }
        Ok(definitions)
    }

    pub fn visit_definition(&self, def: &ast::query::Definition) -> Result<Option<String>> {
        match def {
            ast::query::Definition::Fragment(frag) => self.leave_fragment(frag).map(Some),
            ast::query::Definition::Operation(op) => self.leave_operation(op),
        }
    }

    fn leave_fragment(&self, frag: &ast::query::FragmentDefinition) -> Result<String> {
        let ast::query::TypeCondition::On(on_type) = &frag.type_condition;
        if self.schema.type_kind(on_type).is_none() {
            return Err(CodegenError::UnknownType {
                type_name: on_type.to_owned(),
            });
        }

        let selection_set_to_object = self.selection_set_to_object();
        let selection_set = selection_set_to_object.render(on_type, &frag.selection_set)?;

        Ok(
            DeclarationBlock::new(&self.parsed.declaration_block)
                .with_name(selection_set_to_object.fragment_type_name(&frag.name, false))
                .with_content(selection_set)
                .string()
        )
    }

    fn leave_operation(&self, op: &ast::query::OperationDefinition) -> Result<Option<String>> {
        let operation_kind = OperationKind::of(op);
        let (name, variable_definitions, selection_set) = ast::query::operation_parts(op);

        let name = match name {
            Some(name) => name,
            None => {
                log::warn!(
                    "Skipping anonymous {operation_kind} operation: operations \
                    must be named to generate types for them."
                );
                return Ok(None);
            },
        };

        let root_type = self.schema.root_type_name(operation_kind)
            .ok_or(CodegenError::MissingRootType { operation_kind })?;

        log::debug!("Generating types for {operation_kind} `{name}`.");

        let selection_set = self.selection_set_to_object().render(root_type, selection_set)?;
        let variables = VariablesToObject::new(self.resolver(), self.config.avoid_optionals)
            .transform(variable_definitions);

        let suffix = operation_suffix(name, operation_kind, self.config.dedupe_operation_suffix);
        let variables_suffix = format!("{suffix}Variables");

        let operation_variables = DeclarationBlock::new(&self.parsed.declaration_block)
            .as_kind(DeclarationKind::Struct)
            .with_name(self.parsed.names.convert_name(
                name,
                ConvertNameOptions::with_suffix(&variables_suffix),
            ))
            .with_block(variables.unwrap_or_default())
            .string();

        let operation_result = DeclarationBlock::new(&self.parsed.declaration_block)
            .with_name(self.parsed.names.convert_name(
                name,
                ConvertNameOptions::with_suffix(&suffix),
            ))
            .with_content(selection_set)
            .string();

        Ok(Some(format!("{operation_variables}\n{operation_result}")))
    }
}

/// The suffix appended to an operation's generated type names. With
/// `dedupe` set, names that already end in the suffix get none.
pub fn operation_suffix(name: &str, kind: OperationKind, dedupe: bool) -> String {
    let suffix = kind.type_suffix();
    if dedupe && name.ends_with(suffix.as_str()) {
        String::new()
    } else {
        suffix
    }
}
