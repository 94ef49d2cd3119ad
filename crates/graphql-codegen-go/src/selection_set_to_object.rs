use crate::ast;
use crate::comments;
use crate::modifiers;
use crate::naming::to_pascal_case;
use crate::naming::ConvertNameOptions;
use crate::CodegenError;
use crate::FragmentRegistry;
use crate::GraphQLTypeKind;
use crate::NameConverter;
use crate::SchemaIndex;
use crate::TypeResolver;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CodegenError>;

const TYPENAME_FIELD: &str = "__typename";

/// Options that shape every struct produced by a [`SelectionSetToObject`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSetOptions<'a> {
    pub add_typename: bool,
    pub avoid_optionals: bool,
    pub namespaced_import_name: Option<&'a str>,
    pub non_optional_typename: bool,
}

/// Renders a selection set, evaluated against a schema type, as the text of
/// an anonymous Go struct type.
///
/// Nothing is cached between calls: every call to
/// [`SelectionSetToObject::render`] collects its selections from scratch.
#[derive(Clone, Debug)]
pub struct SelectionSetToObject<'a> {
    fragments: &'a FragmentRegistry,
    names: &'a NameConverter,
    options: SelectionSetOptions<'a>,
    resolver: TypeResolver<'a>,
    schema: &'a SchemaIndex,
}
impl<'a> SelectionSetToObject<'a> {
    pub fn new(
        schema: &'a SchemaIndex,
        resolver: TypeResolver<'a>,
        fragments: &'a FragmentRegistry,
        options: SelectionSetOptions<'a>,
    ) -> Self {
        Self {
            fragments,
            names: resolver.names,
            options,
            resolver,
            schema,
        }
    }

    /// Returns the empty string for an empty selection set.
    pub fn render(
        &self,
        parent_type: &str,
        selection_set: &ast::query::SelectionSet,
    ) -> Result<String> {
        let selections = selection_set.items.iter().collect::<Vec<_>>();
        self.render_selections(parent_type, &selections)
    }

    /// The Go type name generated for a fragment: `<Name>Fragment`, qualified
    /// by the namespace import when the fragment is generated elsewhere.
    pub fn fragment_type_name(&self, fragment_name: &str, is_external: bool) -> String {
        let type_name = self.names.convert_name(
            fragment_name,
            ConvertNameOptions::with_suffix("Fragment"),
        );

        match self.options.namespaced_import_name {
            Some(namespace) if is_external => format!("{namespace}.{type_name}"),
            _ => type_name,
        }
    }

    fn render_selections(
        &self,
        parent_type: &str,
        selections: &[&ast::query::Selection],
    ) -> Result<String> {
        if selections.is_empty() {
            return Ok(String::new());
        }

        let collected = self.collect(parent_type, selections)?;
        let lines = self.build_lines(parent_type, &collected, true)?;
        if lines.is_empty() {
            return Ok("struct {}".to_string());
        }

        Ok(format!("struct {{\n{}\n}}", comments::indent(&lines.join("\n"), 1)))
    }

    fn collect<'s>(
        &self,
        parent_type: &str,
        selections: &[&'s ast::query::Selection],
    ) -> Result<CollectedSelections<'s>> {
        let mut collected = CollectedSelections::default();

        for selection in selections {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.collect_field(parent_type, field, &mut collected),

                ast::query::Selection::FragmentSpread(spread) =>
                    self.collect_fragment_spread(spread, &mut collected),

                ast::query::Selection::InlineFragment(inline) =>
                    self.collect_inline_fragment(parent_type, inline, &mut collected)?,
            }
        }

        Ok(collected)
    }

    fn collect_field<'s>(
        &self,
        parent_type: &str,
        field: &'s ast::query::Field,
        collected: &mut CollectedSelections<'s>,
    ) {
        if field.name == TYPENAME_FIELD {
            collected.queried_typename = true;
            return;
        }

        let field_type = match self.schema.field_type(parent_type, &field.name) {
            Some(field_type) => field_type,
            None => {
                log::warn!(
                    "Skipping selection of `{parent_type}.{}`: no such field is \
                    defined in the schema.",
                    field.name,
                );
                return;
            },
        };

        let response_name = field.alias.as_deref().unwrap_or(&field.name);
        let is_conditional = field.directives.iter()
            .any(|directive| directive.name == "skip" || directive.name == "include");
        let named_type = modifiers::base_type_name(field_type);

        if field.selection_set.items.is_empty() {
            let type_text = self.wrap_field_type(
                &self.resolver.resolve(named_type),
                field_type,
                is_conditional,
            );

            if response_name != field.name {
                collected.aliased.entry(response_name.to_string())
                    .or_insert_with(|| AliasedField {
                        alias: response_name.to_string(),
                        name: field.name.to_owned(),
                        type_text,
                    });
            } else {
                collected.primitives.entry(response_name.to_string())
                    .or_insert_with(|| PrimitiveField {
                        name: field.name.to_owned(),
                        type_text,
                    });
            }
            return;
        }

        let link = collected.links.entry(response_name.to_string())
            .or_insert_with(|| LinkField {
                field_type: field_type.clone(),
                is_conditional: false,
                named_type: named_type.to_string(),
                response_name: response_name.to_string(),
                selections: vec![],
            });
        link.is_conditional |= is_conditional;
        link.selections.extend(field.selection_set.items.iter());
    }

    fn collect_fragment_spread(
        &self,
        spread: &ast::query::FragmentSpread,
        collected: &mut CollectedSelections<'_>,
    ) {
        let fragment = match self.fragments.get(&spread.fragment_name) {
            Some(fragment) => fragment,
            None => {
                log::warn!(
                    "Skipping spread of unknown fragment `{}`.",
                    spread.fragment_name,
                );
                return;
            },
        };

        let type_name = self.fragment_type_name(&fragment.name, fragment.is_external);
        collected.add_fragment(
            FragmentBucket::Type(fragment.on_type.to_owned()),
            FragmentEntry::Spread(type_name),
        );
    }

    fn collect_inline_fragment(
        &self,
        parent_type: &str,
        inline: &ast::query::InlineFragment,
        collected: &mut CollectedSelections<'_>,
    ) -> Result<()> {
        let (bucket, on_type) = match &inline.type_condition {
            Some(ast::query::TypeCondition::On(on_type)) => {
                if self.schema.type_kind(on_type).is_none() {
                    return Err(CodegenError::UnknownType {
                        type_name: on_type.to_owned(),
                    });
                }
                (FragmentBucket::Type(on_type.to_owned()), on_type.as_str())
            },
            None => (FragmentBucket::Default, parent_type),
        };

        let selections = inline.selection_set.items.iter().collect::<Vec<_>>();
        let inner = self.collect(on_type, &selections)?;

        // Branches render as their own `On<Type>` struct and carry their own
        // typename. Flattened fragments contribute to the parent's.
        let is_branch = self.is_abstract(parent_type) && on_type != parent_type;
        if !is_branch {
            collected.queried_typename |= inner.queried_typename;
        }

        let lines = self.build_lines(on_type, &inner, is_branch)?;
        collected.add_fragment(bucket, FragmentEntry::Inline(lines));

        Ok(())
    }

    fn build_lines(
        &self,
        parent_type: &str,
        collected: &CollectedSelections<'_>,
        include_typename: bool,
    ) -> Result<Vec<String>> {
        let mut lines = vec![];

        if include_typename {
            lines.extend(self.build_typename_field(parent_type, collected.queried_typename));
        }

        for field in collected.primitives.values() {
            lines.push(format!(
                "{} {} `json:\"{}\"`",
                to_pascal_case(&field.name),
                field.type_text,
                field.name,
            ));
        }

        for field in collected.aliased.values() {
            lines.push(format!(
                "{} {} `json:\"{}\" originalField:\"{}\"`",
                to_pascal_case(&field.alias),
                field.type_text,
                field.alias,
                field.name,
            ));
        }

        for link in collected.links.values() {
            let nested = self.render_selections(&link.named_type, &link.selections)?;
            let type_text = self.wrap_field_type(&nested, &link.field_type, link.is_conditional);
            lines.push(format!(
                "{} {type_text} `json:\"{}\"`",
                to_pascal_case(&link.response_name),
                link.response_name,
            ));
        }

        lines.extend(self.build_fragments(parent_type, &collected.fragments));

        Ok(lines)
    }

    fn build_typename_field(&self, parent_type: &str, queried_typename: bool) -> Option<String> {
        let emit = queried_typename
            || self.options.add_typename
            || self.options.non_optional_typename;
        if !emit {
            return None;
        }

        let possible_types = match self.schema.type_kind(parent_type) {
            Some(GraphQLTypeKind::Union) => return None,
            Some(GraphQLTypeKind::Interface) => self.schema.implementing_types(parent_type),
            _ => vec![parent_type],
        };
        if possible_types.is_empty() {
            return None;
        }

        let optional_marker =
            if queried_typename || self.options.non_optional_typename {
                ""
            } else {
                "*"
            };

        Some(format!(
            "Typename {optional_marker}string `json:\"{TYPENAME_FIELD}\" types:\"{}\"`",
            possible_types.join(","),
        ))
    }

    fn build_fragments(
        &self,
        parent_type: &str,
        fragments: &IndexMap<FragmentBucket, Vec<FragmentEntry>>,
    ) -> Vec<String> {
        let is_abstract = self.is_abstract(parent_type);

        let mut lines = vec![];
        for (bucket, entries) in fragments {
            let branch_type = match bucket {
                FragmentBucket::Type(on_type) if is_abstract && on_type != parent_type =>
                    on_type,
                _ => {
                    lines.extend(entries.iter().flat_map(FragmentEntry::lines));
                    continue;
                },
            };

            let branch_lines = entries.iter()
                .flat_map(FragmentEntry::lines)
                .collect::<Vec<_>>();
            let body =
                if branch_lines.is_empty() {
                    "struct {}".to_string()
                } else {
                    format!(
                        "struct {{\n{}\n}}",
                        comments::indent(&branch_lines.join("\n"), 1),
                    )
                };

            let branch_name = self.names.convert_name(
                branch_type,
                ConvertNameOptions::default().without_types_prefix(),
            );
            lines.push(format!(
                "On{branch_name} *{body} `graphql:\"... on {branch_type}\"`",
            ));
        }

        lines
    }

    fn is_abstract(&self, type_name: &str) -> bool {
        matches!(
            self.schema.type_kind(type_name),
            Some(GraphQLTypeKind::Interface | GraphQLTypeKind::Union),
        )
    }

    /// Nullable (or `@skip`/`@include`-conditional) fields get a pointer on
    /// their base type unless optionals are avoided.
    fn wrap_field_type(
        &self,
        base: &str,
        type_ref: &ast::Type,
        is_conditional: bool,
    ) -> String {
        let is_optional =
            modifiers::is_innermost_nullable(type_ref)
            || (is_conditional && !modifiers::is_list(type_ref));

        if is_optional && !self.options.avoid_optionals {
            modifiers::wrap_ast_type_with_modifiers(&modifiers::optional(base), type_ref)
        } else {
            modifiers::wrap_ast_type_with_modifiers(base, type_ref)
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum FragmentBucket {
    /// Inline fragments without a type condition.
    Default,
    Type(String),
}

#[derive(Clone, Debug, PartialEq)]
enum FragmentEntry {
    Inline(Vec<String>),

    /// The Go type of a named fragment, embedded into the struct.
    Spread(String),
}
impl FragmentEntry {
    fn lines(&self) -> Vec<String> {
        match self {
            Self::Inline(lines) => lines.clone(),
            Self::Spread(type_name) => vec![type_name.to_owned()],
        }
    }
}

#[derive(Clone, Debug)]
struct PrimitiveField {
    name: String,
    type_text: String,
}

#[derive(Clone, Debug)]
struct AliasedField {
    alias: String,
    name: String,
    type_text: String,
}

#[derive(Clone, Debug)]
struct LinkField<'s> {
    field_type: ast::Type,
    is_conditional: bool,
    named_type: String,
    response_name: String,

    /// Sub-selections of every selection of this response key, merged.
    selections: Vec<&'s ast::query::Selection>,
}

#[derive(Clone, Debug, Default)]
struct CollectedSelections<'s> {
    aliased: IndexMap<String, AliasedField>,
    fragments: IndexMap<FragmentBucket, Vec<FragmentEntry>>,
    links: IndexMap<String, LinkField<'s>>,
    primitives: IndexMap<String, PrimitiveField>,
    queried_typename: bool,
}
impl CollectedSelections<'_> {
    fn add_fragment(&mut self, bucket: FragmentBucket, entry: FragmentEntry) {
        let entries = self.fragments.entry(bucket).or_default();
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }
}
