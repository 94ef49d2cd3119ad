use crate::ast;
use crate::tests::utils::pets_schema;
use crate::tests::utils::schema;
use crate::CodegenError;
use crate::GraphQLTypeKind;
use crate::OperationKind;
use crate::SchemaIndex;

#[test]
fn root_types_default_to_conventional_names() {
    let schema = schema("type Query { a: Int } type Mutation { b: Int }");

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
}

#[test]
fn schema_definition_overrides_root_types() {
    let schema = schema(r#"
        schema { query: RootQuery }
        type RootQuery { a: Int }
        type Mutation { b: Int }
    "#);

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("RootQuery"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), None);
}

#[test]
fn type_extensions_are_merged() {
    let schema = schema(r#"
        type User { id: ID! }
        extend type User implements Node { name: String }
        interface Node { id: ID! }
        enum Color { RED }
        extend enum Color { BLUE }
        union Result = User
        extend union Result = Other
        type Other { x: Int }
    "#);

    assert!(schema.field_type("User", "name").is_some());
    assert_eq!(schema.implementing_types("Node"), vec!["User"]);

    match schema.get_type("Color") {
        Some(ast::schema::TypeDefinition::Enum(color)) => {
            let values = color.values.iter()
                .map(|value| value.name.as_str())
                .collect::<Vec<_>>();
            assert_eq!(values, vec!["RED", "BLUE"]);
        },
        other => panic!("expected an enum, found {other:?}"),
    }

    match schema.get_type("Result") {
        Some(ast::schema::TypeDefinition::Union(result)) =>
            assert_eq!(result.types, vec!["User".to_string(), "Other".to_string()]),
        other => panic!("expected a union, found {other:?}"),
    }

    let extension_count = schema.document().definitions.iter()
        .filter(|def| matches!(def, ast::schema::Definition::TypeExtension(_)))
        .count();
    assert_eq!(extension_count, 0);
}

#[test]
fn extension_of_undefined_type_is_skipped() {
    let schema = schema("extend type Missing { a: Int } type Query { b: Int }");

    assert!(schema.get_type("Missing").is_none());
    assert!(schema.is_object_type("Query"));
}

#[test]
fn type_kinds() {
    let schema = pets_schema();

    assert_eq!(schema.type_kind("String"), Some(GraphQLTypeKind::Scalar));
    assert_eq!(schema.type_kind("Pet"), Some(GraphQLTypeKind::Interface));
    assert_eq!(schema.type_kind("SearchResult"), Some(GraphQLTypeKind::Union));
    assert_eq!(schema.type_kind("Dog"), Some(GraphQLTypeKind::Object));
    assert_eq!(schema.type_kind("Nope"), None);

    assert!(schema.is_interface_type("Node"));
    assert!(schema.is_union_type("SearchResult"));
    assert!(schema.is_leaf_type("ID"));
    assert!(!schema.is_leaf_type("User"));
}

#[test]
fn leaf_types_include_enums() {
    let schema = schema("enum Color { RED } input Filter { c: Color }");

    assert!(schema.is_leaf_type("Color"));
    assert_eq!(schema.type_kind("Filter"), Some(GraphQLTypeKind::InputObject));
}

#[test]
fn implementing_types_are_in_schema_order() {
    assert_eq!(pets_schema().implementing_types("Pet"), vec!["Dog", "Cat"]);
}

#[test]
fn field_types() {
    let schema = pets_schema();

    assert_eq!(
        schema.field_type("Cat", "lives"),
        Some(&ast::Type::NamedType("Int".to_string())),
    );
    assert_eq!(
        schema.field_type("Pet", "name"),
        Some(&ast::Type::NonNullType(Box::new(ast::Type::NamedType("String".to_string())))),
    );
    assert_eq!(
        schema.field_type("SearchResult", "__typename"),
        Some(&ast::Type::NonNullType(Box::new(ast::Type::NamedType("String".to_string())))),
    );
    assert_eq!(schema.field_type("Dog", "lives"), None);
}

#[test]
fn custom_scalars_and_descriptions() {
    let schema = schema(r#"
        "An ISO-8601 timestamp."
        scalar DateTime
        scalar JSON
        type Query { now: DateTime }
    "#);

    assert_eq!(schema.custom_scalar_names().collect::<Vec<_>>(), vec!["DateTime", "JSON"]);
    assert_eq!(schema.description("DateTime"), Some("An ISO-8601 timestamp."));
    assert_eq!(schema.description("JSON"), None);
}

#[test]
fn parse_errors_are_reported() {
    match SchemaIndex::parse("type {") {
        Err(CodegenError::SchemaParse { file: None, .. }) => (),
        other => panic!("expected a schema parse error, found {other:?}"),
    }
}

#[test]
fn multiple_documents_are_indexed_together() {
    let docs = vec![
        ast::schema::parse("type Query { me: User }").unwrap(),
        ast::schema::parse("type User { id: ID! }").unwrap(),
    ];
    let schema = SchemaIndex::from_documents(docs);

    assert!(schema.is_object_type("User"));
    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
}
