use crate::ast;
use crate::modifiers;
use crate::CodegenError;
use crate::DocumentsVisitor;
use crate::FragmentRegistry;
use crate::GoPluginConfig;
use crate::GraphQLTypeKind;
use crate::LoadedFragment;
use crate::OperationsVisitor;
use crate::SchemaIndex;
use crate::TypesVisitor;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CodegenError>;

const DEFAULT_PACKAGE_NAME: &str = "main";

/// One parsed executable document and where it was loaded from.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFile {
    pub document: ast::query::Document,
    pub location: Option<PathBuf>,
}
impl DocumentFile {
    pub fn parse(location: Option<PathBuf>, content: &str) -> Result<Self> {
        let document = ast::query::parse(content)
            .map_err(|err| CodegenError::DocumentParse {
                file: location.to_owned(),
                err: Arc::new(err),
            })?;

        Ok(Self {
            document,
            location,
        })
    }
}

/// Inputs shared by every plugin invocation besides the schema, documents and
/// plugin config.
#[derive(Clone, Debug, Default)]
pub struct PluginInfo {
    /// Fragments whose Go types are generated elsewhere but may be spread in
    /// the documents being generated.
    pub external_fragments: Vec<LoadedFragment>,

    /// Path of the file the output will be written to. Used to derive the Go
    /// package name when none is configured.
    pub output_file: Option<PathBuf>,
}

/// Text produced by one plugin invocation. `prepend` holds file-level lines
/// (package clause and imports) that the host merges across plugins writing
/// the same file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PluginOutput {
    pub content: String,
    pub prepend: Vec<String>,
}
impl PluginOutput {
    pub fn render(&self) -> String {
        let mut rendered = self.prepend.join("\n");
        if !rendered.is_empty() {
            rendered.push_str("\n\n");
        }
        rendered.push_str(self.content.trim_end());
        rendered.push('\n');
        rendered
    }
}

/// The plugins a codegen config may list for an output file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
pub enum Plugin {
    #[serde(rename = "go")]
    Go,

    #[serde(rename = "go-documents")]
    GoDocuments,

    /// Schema types restricted to those the documents use.
    #[serde(rename = "go-introspection")]
    GoIntrospection,

    #[serde(rename = "go-operations")]
    GoOperations,
}
impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::GoDocuments => "go-documents",
            Self::GoIntrospection => "go-introspection",
            Self::GoOperations => "go-operations",
        }
    }

    pub fn run(
        &self,
        schema: &SchemaIndex,
        documents: &[DocumentFile],
        config: &GoPluginConfig,
        info: &PluginInfo,
    ) -> Result<PluginOutput> {
        log::debug!("Running the `{}` plugin.", self.name());
        match self {
            Self::Go => Ok(types_plugin(schema, config, info)),
            Self::GoDocuments => Ok(documents_plugin(documents, config, info)),
            Self::GoIntrospection => Ok(introspection_types_plugin(schema, documents, config, info)),
            Self::GoOperations => operations_plugin(schema, documents, config, info),
        }
    }
}
impl std::fmt::Display for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins the definitions of every document into a single document.
pub fn concat_documents(documents: &[DocumentFile]) -> ast::query::Document {
    ast::query::Document {
        definitions: documents.iter()
            .flat_map(|file| file.document.definitions.iter().cloned())
            .collect(),
    }
}

/// The fragments defined in `doc`, followed by `external_fragments`.
pub fn load_fragments(
    doc: &ast::query::Document,
    external_fragments: &[LoadedFragment],
) -> FragmentRegistry {
    FragmentRegistry::new(
        LoadedFragment::from_document(doc, false),
        external_fragments.to_vec(),
    )
}

/// Generates Go declarations for every type in the schema.
pub fn types_plugin(
    schema: &SchemaIndex,
    config: &GoPluginConfig,
    info: &PluginInfo,
) -> PluginOutput {
    let parsed = config.parse(Some(schema));
    render_types(TypesVisitor::new(schema, config, &parsed), schema, config, info)
}

/// Like [`types_plugin`], but object and enum types are only generated when
/// the documents reference them.
pub fn introspection_types_plugin(
    schema: &SchemaIndex,
    documents: &[DocumentFile],
    config: &GoPluginConfig,
    info: &PluginInfo,
) -> PluginOutput {
    let doc = concat_documents(documents);
    let included_types = used_types(schema, &doc);
    log::debug!("Documents reference {} schema types.", included_types.len());

    let parsed = config.parse(Some(schema));
    let visitor = TypesVisitor::new(schema, config, &parsed)
        .with_included_types(&included_types);
    render_types(visitor, schema, config, info)
}

fn render_types(
    visitor: TypesVisitor<'_>,
    schema: &SchemaIndex,
    config: &GoPluginConfig,
    info: &PluginInfo,
) -> PluginOutput {
    let definitions = visitor.visit_document(schema.document());

    let mut prepend = package_prepend(config, info);
    prepend.extend(config.enum_imports());

    let content = std::iter::once(format!("{}\n", visitor.scalars_definition()))
        .chain(definitions)
        .collect::<Vec<_>>()
        .join("\n");

    PluginOutput {
        content,
        prepend,
    }
}

/// Generates result and variables types for the fragments and named
/// operations of `documents`.
pub fn operations_plugin(
    schema: &SchemaIndex,
    documents: &[DocumentFile],
    config: &GoPluginConfig,
    info: &PluginInfo,
) -> Result<PluginOutput> {
    let doc = concat_documents(documents);
    let fragments = load_fragments(&doc, &info.external_fragments);
    let parsed = config.parse(Some(schema));

    let definitions = OperationsVisitor::new(schema, config, &parsed, &fragments)
        .visit_document(&doc)?;

    Ok(PluginOutput {
        content: definitions.join("\n"),
        prepend: package_prepend(config, info),
    })
}

/// Generates a string constant with the printed text of every fragment and
/// named operation in `documents`.
pub fn documents_plugin(
    documents: &[DocumentFile],
    config: &GoPluginConfig,
    info: &PluginInfo,
) -> PluginOutput {
    let doc = concat_documents(documents);
    let fragments = load_fragments(&doc, &info.external_fragments);

    let output = DocumentsVisitor::new(config, &fragments).visit_document(&doc);
    log::debug!(
        "Generated document constants for {} operations.",
        output.collected_operations.len(),
    );

    PluginOutput {
        content: output.definitions.join("\n"),
        prepend: package_prepend(config, info),
    }
}

fn package_prepend(config: &GoPluginConfig, info: &PluginInfo) -> Vec<String> {
    let mut prepend = vec![format!("package {}", package_name(config, info.output_file.as_deref()))];
    prepend.extend(config.imports.iter().cloned());
    prepend
}

/// The configured package name, else the name of the output file's directory
/// made into a Go identifier, else `main`.
pub fn package_name(config: &GoPluginConfig, output_file: Option<&Path>) -> String {
    if let Some(package) = config.package.as_deref().filter(|pkg| !pkg.is_empty()) {
        return package.to_string();
    }

    output_file
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|dir_name| dir_name.to_str())
        .map(sanitize_package_name)
        .filter(|pkg| !pkg.is_empty())
        .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string())
}

fn sanitize_package_name(dir_name: &str) -> String {
    let sanitized = dir_name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();

    match sanitized.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{sanitized}"),
        _ => sanitized,
    }
}

/// Names of the schema types the operations in `doc` reference: the types of
/// selected fields, fragment type conditions and variable types, plus the
/// input object fields reachable from those.
fn used_types(schema: &SchemaIndex, doc: &ast::query::Document) -> HashSet<String> {
    let mut used = HashSet::new();

    for def in &doc.definitions {
        match def {
            ast::query::Definition::Fragment(frag) => {
                let ast::query::TypeCondition::On(on_type) = &frag.type_condition;
                mark_used(schema, on_type, &mut used);
                collect_selected_types(schema, on_type, &frag.selection_set, &mut used);
            },

            ast::query::Definition::Operation(op) => {
                let (_, variables, selection_set) = ast::query::operation_parts(op);

                for var in variables {
                    mark_used(schema, modifiers::base_type_name(&var.var_type), &mut used);
                }

                if let Some(root_type) = schema.root_type_name(crate::OperationKind::of(op)) {
                    mark_used(schema, root_type, &mut used);
                    collect_selected_types(schema, root_type, selection_set, &mut used);
                }
            },
        }
    }

    used
}

fn collect_selected_types(
    schema: &SchemaIndex,
    parent_type: &str,
    selection_set: &ast::query::SelectionSet,
    used: &mut HashSet<String>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) => {
                let Some(field_type) = schema.field_type(parent_type, &field.name) else {
                    continue;
                };
                let named_type = modifiers::base_type_name(field_type);
                mark_used(schema, named_type, used);
                collect_selected_types(schema, named_type, &field.selection_set, used);
            },

            ast::query::Selection::FragmentSpread(_) => (),

            ast::query::Selection::InlineFragment(inline) => {
                let on_type = match &inline.type_condition {
                    Some(ast::query::TypeCondition::On(on_type)) => on_type.as_str(),
                    None => parent_type,
                };
                mark_used(schema, on_type, used);
                collect_selected_types(schema, on_type, &inline.selection_set, used);
            },
        }
    }
}

/// Marks `type_name` used, following input object fields.
fn mark_used(schema: &SchemaIndex, type_name: &str, used: &mut HashSet<String>) {
    if !used.insert(type_name.to_string()) {
        return;
    }

    if schema.type_kind(type_name) != Some(GraphQLTypeKind::InputObject) {
        return;
    }

    if let Some(ast::schema::TypeDefinition::InputObject(input)) = schema.get_type(type_name) {
        for field in &input.fields {
            mark_used(schema, modifiers::base_type_name(&field.value_type), used);
        }
    }
}
