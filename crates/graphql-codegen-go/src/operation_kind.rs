use crate::ast;
use heck::ToUpperCamelCase;

/// The kind of an executable operation, without the operation itself.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword used for this kind of operation in GraphQL documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The suffix appended to generated operation type names (`Query`,
    /// `Mutation`, `Subscription`).
    pub fn type_suffix(&self) -> String {
        self.as_str().to_upper_camel_case()
    }

    pub(crate) fn of(def: &ast::query::OperationDefinition) -> Self {
        match def {
            ast::query::OperationDefinition::Mutation(_) => Self::Mutation,
            ast::query::OperationDefinition::Query(_)
            | ast::query::OperationDefinition::SelectionSet(_) => Self::Query,
            ast::query::OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
