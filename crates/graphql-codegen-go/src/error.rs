use crate::ast;
use crate::OperationKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CodegenError {
    #[error(
        "Error parsing GraphQL document{}: {err}",
        file.as_ref().map(|f| format!(" {f:?}")).unwrap_or_default(),
    )]
    DocumentParse {
        file: Option<PathBuf>,
        err: Arc<ast::query::ParseError>,
    },

    #[error(
        "Unable to find root schema type for operation type \
        \"{}\"!",
        operation_kind.as_str(),
    )]
    MissingRootType {
        operation_kind: OperationKind,
    },

    #[error(
        "Error parsing GraphQL schema{}: {err}",
        file.as_ref().map(|f| format!(" {f:?}")).unwrap_or_default(),
    )]
    SchemaParse {
        file: Option<PathBuf>,
        err: Arc<ast::schema::ParseError>,
    },

    #[error(
        "The type `{type_name}` is used as a type condition but is not \
        defined in the schema."
    )]
    UnknownType {
        type_name: String,
    },
}
