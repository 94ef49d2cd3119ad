use crate::ast;
use crate::naming::ConvertNameOptions;
use crate::FragmentRegistry;
use crate::GoPluginConfig;
use crate::NameConverter;
use crate::OperationKind;
use std::collections::HashSet;

/// A named operation for which a document constant was generated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectedOperation {
    pub document_name: String,
    pub kind: OperationKind,
    pub name: String,
}

/// The result of folding a document through a [`DocumentsVisitor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentsOutput {
    pub collected_operations: Vec<CollectedOperation>,
    pub definitions: Vec<String>,
}

/// Generates Go string constants holding the printed text of fragments and
/// operations.
#[derive(Clone, Debug)]
pub struct DocumentsVisitor<'a> {
    fragments: &'a FragmentRegistry,
    names: NameConverter,
    namespaced_import_name: Option<&'a str>,
}
impl<'a> DocumentsVisitor<'a> {
    pub fn new(config: &'a GoPluginConfig, fragments: &'a FragmentRegistry) -> Self {
        Self {
            fragments,
            names: config.name_converter(),
            namespaced_import_name: config.namespaced_import_name(),
        }
    }

    pub fn visit_document(&self, doc: &ast::query::Document) -> DocumentsOutput {
        doc.definitions.iter().fold(DocumentsOutput::default(), |mut output, def| {
            match def {
                ast::query::Definition::Fragment(frag) => {
                    output.definitions.push(self.leave_fragment(frag));
                },
                ast::query::Definition::Operation(op) => {
                    if let Some((definition, collected)) = self.leave_operation(op) {
                        output.definitions.push(definition);
                        output.collected_operations.push(collected);
                    }
                },
            }
            output
        })
    }

    fn leave_fragment(&self, frag: &ast::query::FragmentDefinition) -> String {
        format!(
            "const {} = {}",
            self.fragment_doc_name(&frag.name),
            raw_string(&frag.to_string()),
        )
    }

    fn leave_operation(
        &self,
        op: &ast::query::OperationDefinition,
    ) -> Option<(String, CollectedOperation)> {
        let (name, _, selection_set) = ast::query::operation_parts(op);

        let Some(name) = name else {
            log::debug!("Skipping document constant for anonymous operation.");
            return None;
        };

        let document_name = self.names.convert_name(
            name,
            ConvertNameOptions::with_suffix("Document").without_types_prefix(),
        );

        let mut document = raw_string(&op.to_string());
        for fragment_name in self.transitive_fragments(selection_set) {
            document.push_str(" + \"\\n\" + ");
            document.push_str(&self.fragment_doc_reference(&fragment_name));
        }

        Some((
            format!("const {document_name} = {document}"),
            CollectedOperation {
                document_name,
                kind: OperationKind::of(op),
                name: name.to_string(),
            },
        ))
    }

    /// Names of every fragment reachable from `selection_set` through
    /// spreads, in depth-first discovery order, each listed once.
    pub fn transitive_fragments(&self, selection_set: &ast::query::SelectionSet) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ordered = vec![];
        self.collect_spreads(selection_set, &mut seen, &mut ordered);
        ordered
    }

    fn collect_spreads(
        &self,
        selection_set: &ast::query::SelectionSet,
        seen: &mut HashSet<String>,
        ordered: &mut Vec<String>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.collect_spreads(&field.selection_set, seen, ordered),

                ast::query::Selection::InlineFragment(inline) =>
                    self.collect_spreads(&inline.selection_set, seen, ordered),

                ast::query::Selection::FragmentSpread(spread) => {
                    if !seen.insert(spread.fragment_name.to_owned()) {
                        continue;
                    }

                    match self.fragments.get(&spread.fragment_name) {
                        Some(fragment) => {
                            ordered.push(spread.fragment_name.to_owned());
                            self.collect_spreads(&fragment.node.selection_set, seen, ordered);
                        },
                        None => log::warn!(
                            "Omitting unknown fragment `{}` from document constants.",
                            spread.fragment_name,
                        ),
                    }
                },
            }
        }
    }

    fn fragment_doc_name(&self, fragment_name: &str) -> String {
        self.names.convert_name(
            fragment_name,
            ConvertNameOptions::with_suffix("FragmentDoc").without_types_prefix(),
        )
    }

    fn fragment_doc_reference(&self, fragment_name: &str) -> String {
        let doc_name = self.fragment_doc_name(fragment_name);
        let is_external = self.fragments.get(fragment_name)
            .is_some_and(|fragment| fragment.is_external);

        match self.namespaced_import_name {
            Some(namespace) if is_external => format!("{namespace}.{doc_name}"),
            _ => doc_name,
        }
    }
}

/// Quotes `text` as a Go raw string literal. Backticks cannot appear inside
/// one, so each is spliced in as an interpreted string.
pub fn raw_string(text: &str) -> String {
    format!("`{}`", text.trim_end().replace('`', "` + \"`\" + `"))
}
