use crate::ast;
use indexmap::IndexMap;

/// A fragment definition available for spreads, either from the documents
/// being generated or supplied from elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedFragment {
    /// Set for fragments whose Go type is generated in another package.
    pub is_external: bool,
    pub name: String,
    pub node: ast::query::FragmentDefinition,
    pub on_type: String,
}
impl LoadedFragment {
    pub fn new(node: ast::query::FragmentDefinition, is_external: bool) -> Self {
        let ast::query::TypeCondition::On(on_type) = &node.type_condition;
        Self {
            is_external,
            name: node.name.to_owned(),
            on_type: on_type.to_owned(),
            node,
        }
    }

    /// Collects every fragment definition in `doc`.
    pub fn from_document(doc: &ast::query::Document, is_external: bool) -> Vec<Self> {
        doc.definitions.iter()
            .filter_map(|def| match def {
                ast::query::Definition::Fragment(frag) => Some(Self::new(frag.clone(), is_external)),
                ast::query::Definition::Operation(_) => None,
            })
            .collect()
    }
}

/// Fragments indexed by name. Local fragments come first and win over
/// external fragments of the same name.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, LoadedFragment>,
}
impl FragmentRegistry {
    pub fn new(
        local: Vec<LoadedFragment>,
        external: Vec<LoadedFragment>,
    ) -> Self {
        let mut fragments = IndexMap::new();
        for frag in local.into_iter().chain(external) {
            if fragments.contains_key(&frag.name) {
                log::debug!(
                    "Ignoring duplicate definition of fragment `{}`.",
                    frag.name,
                );
                continue;
            }
            fragments.insert(frag.name.to_owned(), frag);
        }

        Self { fragments }
    }

    pub fn get(&self, name: &str) -> Option<&LoadedFragment> {
        self.fragments.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedFragment> {
        self.fragments.values()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
