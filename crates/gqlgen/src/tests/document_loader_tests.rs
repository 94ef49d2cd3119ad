use crate::document_loader;
use crate::document_loader::DocumentLoadError;
use graphql_codegen_go::CodegenError;
use std::collections::HashSet;
use std::path::Path;

fn default_exts() -> HashSet<String> {
    document_loader::normalize_file_exts(&[
        "graphql".to_string(),
        ".graphqls".to_string(),
        "gql".to_string(),
    ])
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn extensions_are_normalized() {
    assert_eq!(
        document_loader::normalize_file_exts(&[".graphql".to_string(), " gql ".to_string(), String::new()]),
        HashSet::from(["graphql".to_string(), "gql".to_string()]),
    );
}

#[test]
fn directories_are_walked_and_filtered_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("b.graphql"), "");
    write(&dir.path().join("a/nested.gql"), "");
    write(&dir.path().join("notes.txt"), "");

    let files = document_loader::find_graphql_files(
        &[dir.path().to_path_buf()],
        &default_exts(),
    ).unwrap();

    assert_eq!(
        files,
        vec![dir.path().join("a/nested.gql"), dir.path().join("b.graphql")],
    );
}

#[test]
fn explicit_files_are_loaded_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let schema_file = dir.path().join("schema.txt");
    write(&schema_file, "type Query { a: Int }");

    let files = document_loader::find_graphql_files(
        &[schema_file.clone(), schema_file.clone()],
        &default_exts(),
    ).unwrap();

    assert_eq!(files, vec![schema_file]);
}

#[test]
fn missing_paths_are_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = document_loader::find_graphql_files(
        &[dir.path().join("missing")],
        &default_exts(),
    ).unwrap_err();

    assert!(matches!(err, DocumentLoadError::PathNotFound(_)));
}

#[test]
fn schema_files_are_combined() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("query.graphql"), "type Query { me: User }");
    write(&dir.path().join("user.graphqls"), "type User { id: ID! }");

    let schema = document_loader::load_schema(
        &[dir.path().to_path_buf()],
        &default_exts(),
    ).unwrap();

    assert!(schema.is_object_type("Query"));
    assert!(schema.is_object_type("User"));
}

#[test]
fn empty_schema_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = document_loader::load_schema(&[dir.path().to_path_buf()], &default_exts())
        .unwrap_err();

    assert!(matches!(err, DocumentLoadError::NoSchemaFiles));
}

#[test]
fn document_parse_errors_carry_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad_file = dir.path().join("bad.graphql");
    write(&bad_file, "query {");

    let err = document_loader::load_documents(&[bad_file.clone()], &default_exts())
        .unwrap_err();

    assert!(matches!(
        err,
        DocumentLoadError::Codegen(CodegenError::DocumentParse { ref file, .. })
            if file.as_deref() == Some(bad_file.as_path()),
    ));
}

#[test]
fn external_fragments_are_marked_external() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("fragments.graphql"),
        "fragment UserFields on User { id } query Ignored { me { id } }",
    );

    let fragments = document_loader::load_external_fragments(
        &[dir.path().to_path_buf()],
        &default_exts(),
    ).unwrap();

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].name, "UserFields");
    assert!(fragments[0].is_external);
}
