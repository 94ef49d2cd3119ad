use crate::ast;
use crate::comments;
use crate::config::ExternalType;
use crate::modifiers::ScalarReference;
use crate::naming::to_pascal_case;
use crate::DeclarationBlock;
use crate::DeclarationKind;
use crate::GoPluginConfig;
use crate::ParsedGoConfig;
use crate::SchemaIndex;
use crate::TypeResolver;
use crate::VariablesToObject;
use std::collections::HashSet;

/// Generates one Go declaration per type definition in a schema.
///
/// The traversal is a post-order fold: the fields (and input values) of a
/// definition are reduced to their final text first, then the reducer for
/// the definition receives the original node along with the reduced
/// children. Reducers return `None` for definitions that have no Go
/// counterpart.
#[derive(Clone, Debug)]
pub struct TypesVisitor<'a> {
    config: &'a GoPluginConfig,
    included_types: Option<&'a HashSet<String>>,
    parsed: &'a ParsedGoConfig,
    schema: &'a SchemaIndex,
}
impl<'a> TypesVisitor<'a> {
    pub fn new(
        schema: &'a SchemaIndex,
        config: &'a GoPluginConfig,
        parsed: &'a ParsedGoConfig,
    ) -> Self {
        Self {
            config,
            included_types: None,
            parsed,
            schema,
        }
    }

    /// Restricts object and enum output to the named types. Other kinds of
    /// definitions are unaffected.
    pub fn with_included_types(mut self, included_types: &'a HashSet<String>) -> Self {
        self.included_types = Some(included_types);
        self
    }

    fn resolver(&self) -> TypeResolver<'a> {
        TypeResolver {
            names: &self.parsed.names,
            namespaced_import_name: None,
            scalar_reference: ScalarReference::DeclaredName,
            scalars: &self.parsed.scalars,
        }
    }

    fn variables_to_object(&self) -> VariablesToObject<'a> {
        VariablesToObject::new(self.resolver(), self.config.avoid_optionals)
    }

    /// One `type <Scalar> <GoType>` line per entry of the scalars map,
    /// documented with the scalar's schema description when it has one.
    pub fn scalars_definition(&self) -> String {
        self.parsed.scalars.iter()
            .map(|(scalar_name, go_type)| format!(
                "{}type {scalar_name} {go_type}",
                comments::transform_comment(self.schema.description(scalar_name), 0),
            ))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn visit_document(&self, doc: &ast::schema::Document) -> Vec<String> {
        doc.definitions.iter()
            .filter_map(|def| self.visit_definition(def))
            .collect()
    }

    pub fn visit_definition(&self, def: &ast::schema::Definition) -> Option<String> {
        match def {
            ast::schema::Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(type_def),

            // Extensions are merged into their base definitions by the
            // SchemaIndex.
            ast::schema::Definition::DirectiveDefinition(_)
            | ast::schema::Definition::SchemaDefinition(_)
            | ast::schema::Definition::TypeExtension(_) => None,
        }
    }

    fn visit_type_definition(&self, type_def: &ast::schema::TypeDefinition) -> Option<String> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(node) => self.leave_enum(node),

            TypeDefinition::InputObject(node) => {
                let fields = node.fields.iter()
                    .map(|value| self.leave_input_value(value))
                    .collect::<Vec<_>>();
                self.leave_input_object(node, fields)
            },

            TypeDefinition::Interface(node) => {
                let fields = node.fields.iter()
                    .map(|field| self.leave_field(field))
                    .collect::<Vec<_>>();
                self.leave_interface(node, fields)
            },

            TypeDefinition::Object(node) => {
                let fields = node.fields.iter()
                    .map(|field| self.leave_field(field))
                    .collect::<Vec<_>>();
                self.leave_object(node, fields)
            },

            // Emitted once up front by `scalars_definition()`.
            TypeDefinition::Scalar(_) => None,

            TypeDefinition::Union(node) => self.leave_union(node),
        }
    }

    fn leave_field(&self, field: &ast::schema::Field) -> String {
        let comment = comments::transform_comment(field.description.as_deref(), 1);
        let field_type = self.resolver().output_type(
            &field.field_type,
            self.config.avoid_optionals,
        );

        format!(
            "{comment}{}{} {field_type} `json:\"{}\"`",
            comments::INDENT,
            to_pascal_case(&field.name),
            field.name,
        )
    }

    fn leave_input_value(&self, value: &ast::schema::InputValue) -> String {
        self.variables_to_object().transform_variable(value)
    }

    fn leave_input_object(
        &self,
        node: &ast::schema::InputObjectType,
        fields: Vec<String>,
    ) -> Option<String> {
        Some(
            DeclarationBlock::new(&self.parsed.declaration_block)
                .as_kind(DeclarationKind::Struct)
                .with_name(self.parsed.names.convert(&node.name))
                .with_comment(node.description.as_deref())
                .with_block(fields.join("\n"))
                .string()
        )
    }

    fn leave_interface(
        &self,
        node: &ast::schema::InterfaceType,
        fields: Vec<String>,
    ) -> Option<String> {
        let interfaces = node.implements_interfaces.iter()
            .map(|iface| self.parsed.names.convert(iface))
            .collect::<Vec<_>>();

        let type_name = self.parsed.names.convert(&node.name);
        let definition = DeclarationBlock::new(&self.parsed.declaration_block)
            .as_kind(DeclarationKind::Struct)
            .with_name(type_name.as_str())
            .with_comment(node.description.as_deref())
            .with_block(fields.join("\n"))
            .implements(interfaces)
            .string();

        Some(self.with_arguments_blocks(definition, &type_name, &node.fields))
    }

    fn leave_object(
        &self,
        node: &ast::schema::ObjectType,
        fields: Vec<String>,
    ) -> Option<String> {
        if !self.is_included(&node.name) {
            return None;
        }

        // Read from the original node: the reduced fields carry no structured
        // interface references.
        let interfaces = node.implements_interfaces.iter()
            .map(|iface| self.parsed.names.convert(iface))
            .collect::<Vec<_>>();

        let type_name = self.parsed.names.convert(&node.name);
        let definition = DeclarationBlock::new(&self.parsed.declaration_block)
            .as_kind(DeclarationKind::Struct)
            .with_name(type_name.as_str())
            .with_comment(node.description.as_deref())
            .with_block(fields.join("\n"))
            .implements(interfaces)
            .string();

        Some(self.with_arguments_blocks(definition, &type_name, &node.fields))
    }

    /// Appends a `<Type><Field>Args` struct for every field that declares
    /// arguments.
    fn with_arguments_blocks(
        &self,
        definition: String,
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> String {
        let variables_to_object = self.variables_to_object();
        let args_blocks = fields.iter()
            .filter_map(|field| {
                let block = variables_to_object.transform(&field.arguments)?;
                Some(
                    DeclarationBlock::new(&self.parsed.declaration_block)
                        .as_kind(DeclarationKind::Struct)
                        .with_name(format!(
                            "{type_name}{}Args",
                            to_pascal_case(&field.name),
                        ))
                        .with_block(block)
                        .string()
                )
            });

        std::iter::once(definition)
            .chain(args_blocks)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn leave_union(&self, node: &ast::schema::UnionType) -> Option<String> {
        let resolver = self.resolver();
        let possible_types = node.types.iter()
            .map(|member| resolver.resolve(member))
            .collect::<Vec<_>>()
            .join(" | ");

        Some(
            DeclarationBlock::new(&self.parsed.declaration_block)
                .as_kind(DeclarationKind::Struct)
                .with_name(self.parsed.names.convert(&node.name))
                .with_comment(node.description.as_deref())
                .with_block(format!("{}// {possible_types}", comments::INDENT))
                .string()
        )
    }

    fn leave_enum(&self, node: &ast::schema::EnumType) -> Option<String> {
        if !self.is_included(&node.name) {
            return None;
        }

        let enum_name = self.parsed.names.convert(&node.name);

        if let Some(external) = self.config.external_enum(&node.name) {
            return Some(self.external_enum(node, &enum_name, &external));
        }

        if self.config.enums_as_types {
            return Some(self.enum_as_type(node, &enum_name));
        }

        let type_decl = DeclarationBlock::new(&self.parsed.declaration_block)
            .as_kind(DeclarationKind::Enum)
            .with_name(enum_name.as_str())
            .with_comment(node.description.as_deref())
            .string();

        let constants = node.values.iter()
            .map(|value| format!(
                "{}{}{} {enum_name} = \"{}\"",
                comments::transform_comment(value.description.as_deref(), 1),
                comments::INDENT,
                enum_constant_name(&enum_name, &value.name),
                self.enum_value(&node.name, &value.name),
            ))
            .collect::<Vec<_>>()
            .join("\n");

        let mut output = format!("{type_decl}\nconst (\n{constants}\n)\n");
        if self.config.const_enums {
            output.push('\n');
            output.push_str(&const_enum_helpers(node, &enum_name));
        }

        Some(output)
    }

    fn enum_as_type(&self, node: &ast::schema::EnumType, enum_name: &str) -> String {
        let allowed_values = node.values.iter()
            .map(|value| format!("\"{}\"", self.enum_value(&node.name, &value.name)))
            .collect::<Vec<_>>()
            .join(", ");
        let comment = match node.description.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() =>
                format!("{desc}\n\nAllowed values: {allowed_values}"),
            _ => format!("Allowed values: {allowed_values}"),
        };

        DeclarationBlock::new(&self.parsed.declaration_block)
            .as_kind(DeclarationKind::Enum)
            .with_name(enum_name)
            .with_comment(Some(comment.as_str()))
            .string()
    }

    fn external_enum(
        &self,
        node: &ast::schema::EnumType,
        enum_name: &str,
        external: &ExternalType,
    ) -> String {
        log::debug!(
            "Mapping enum `{}` to external type `{}` from `{}`.",
            node.name,
            external.type_name,
            external.import_path,
        );

        DeclarationBlock::new(&self.parsed.declaration_block)
            .with_name(enum_name)
            .with_comment(node.description.as_deref())
            .with_content(format!("= {}", external.qualified_type_name()))
            .string()
    }

    fn enum_value<'v>(&'v self, enum_name: &str, value: &'v str) -> &'v str {
        self.config.enum_value_override(enum_name, value).unwrap_or(value)
    }

    fn is_included(&self, type_name: &str) -> bool {
        self.included_types.is_none_or(|included| included.contains(type_name))
    }
}

/// `<Enum><PascalValue>`. Prefixing with the enum name keeps constants unique
/// across enums that share a value name.
pub fn enum_constant_name(enum_name: &str, value: &str) -> String {
    format!("{enum_name}{}", to_pascal_case(value))
}

fn const_enum_helpers(node: &ast::schema::EnumType, enum_name: &str) -> String {
    let constant_names = node.values.iter()
        .map(|value| enum_constant_name(enum_name, &value.name))
        .collect::<Vec<_>>();

    let all_values = constant_names.iter()
        .map(|name| format!("{}{name},", comments::INDENT))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "var All{enum_name} = []{enum_name}{{\n{all_values}\n}}\n\n\
        func (e {enum_name}) IsValid() bool {{\n\
        \tswitch e {{\n\
        \tcase {}:\n\
        \t\treturn true\n\
        \t}}\n\
        \treturn false\n\
        }}\n",
        constant_names.join(", "),
    )
}
