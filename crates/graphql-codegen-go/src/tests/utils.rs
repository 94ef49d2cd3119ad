use crate::ast;
use crate::DocumentFile;
use crate::SchemaIndex;

pub(super) const PETS_SCHEMA: &str = r#"
type Query {
  me: User
  node(id: ID!): Node
  pets: [Pet!]!
  search(term: String!): [SearchResult]
}

interface Node {
  id: ID!
}

interface Pet {
  name: String!
}

type Dog implements Pet {
  name: String!
  barks: Boolean!
}

type Cat implements Pet {
  name: String!
  lives: Int
}

type User implements Node {
  id: ID!
  name: String
  friends: [User!]
}

union SearchResult = User | Dog
"#;

pub(super) fn schema(sdl: &str) -> SchemaIndex {
    SchemaIndex::parse(sdl).unwrap()
}

pub(super) fn pets_schema() -> SchemaIndex {
    schema(PETS_SCHEMA)
}

pub(super) fn document(src: &str) -> ast::query::Document {
    ast::query::parse(src).unwrap()
}

pub(super) fn document_files(src: &str) -> Vec<DocumentFile> {
    vec![DocumentFile::parse(None, src).unwrap()]
}

/// The selection set of the first operation in `src`.
pub(super) fn first_operation_selection_set(src: &str) -> ast::query::SelectionSet {
    let doc = document(src);
    doc.definitions.into_iter()
        .find_map(|def| match def {
            ast::query::Definition::Operation(op) =>
                Some(ast::query::operation_parts(&op).2.clone()),
            ast::query::Definition::Fragment(_) => None,
        })
        .unwrap()
}

pub(super) fn named_type(name: &str) -> ast::Type {
    ast::Type::NamedType(name.to_string())
}

pub(super) fn non_null(inner: ast::Type) -> ast::Type {
    ast::Type::NonNullType(Box::new(inner))
}

pub(super) fn list(inner: ast::Type) -> ast::Type {
    ast::Type::ListType(Box::new(inner))
}
