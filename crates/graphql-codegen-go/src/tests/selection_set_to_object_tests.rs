use crate::load_fragments;
use crate::tests::utils::document;
use crate::tests::utils::first_operation_selection_set;
use crate::tests::utils::pets_schema;
use crate::CodegenError;
use crate::FragmentRegistry;
use crate::GoPluginConfig;
use crate::LoadedFragment;
use crate::ScalarReference;
use crate::SchemaIndex;
use crate::SelectionSetOptions;
use crate::SelectionSetToObject;
use crate::TypeResolver;

type Result<T> = std::result::Result<T, CodegenError>;

fn render_with(
    schema: &SchemaIndex,
    src: &str,
    external_fragments: &[LoadedFragment],
    options: SelectionSetOptions<'_>,
) -> Result<String> {
    let doc = document(src);
    let fragments = load_fragments(&doc, external_fragments);
    let parsed = GoPluginConfig::default().parse(Some(schema));
    let resolver = TypeResolver {
        names: &parsed.names,
        namespaced_import_name: options.namespaced_import_name,
        scalar_reference: ScalarReference::GoType,
        scalars: &parsed.scalars,
    };

    SelectionSetToObject::new(schema, resolver, &fragments, options)
        .render("Query", &first_operation_selection_set(src))
}

fn render(src: &str) -> Result<String> {
    render_with(&pets_schema(), src, &[], SelectionSetOptions::default())
}

#[test]
fn nested_selections_become_nested_structs() {
    assert_eq!(
        render("query Q { me { id name } }").unwrap(),
        "struct {\n\
        \tMe *struct {\n\
        \t\tId string `json:\"id\"`\n\
        \t\tName *string `json:\"name\"`\n\
        \t} `json:\"me\"`\n\
        }",
    );
}

#[test]
fn empty_selection_set_renders_nothing() {
    let schema = pets_schema();
    let fragments = FragmentRegistry::default();
    let parsed = GoPluginConfig::default().parse(Some(&schema));
    let resolver = TypeResolver {
        names: &parsed.names,
        namespaced_import_name: None,
        scalar_reference: ScalarReference::GoType,
        scalars: &parsed.scalars,
    };
    let mut selection_set = first_operation_selection_set("{ me { id } }");
    selection_set.items.clear();

    let rendered = SelectionSetToObject::new(
        &schema,
        resolver,
        &fragments,
        SelectionSetOptions::default(),
    ).render("Query", &selection_set);

    assert_eq!(rendered.unwrap(), "");
}

#[test]
fn non_null_lists_are_plain_slices() {
    assert_eq!(
        render("{ pets { name } }").unwrap(),
        "struct {\n\
        \tPets []struct {\n\
        \t\tName string `json:\"name\"`\n\
        \t} `json:\"pets\"`\n\
        }",
    );
}

#[test]
fn interface_typename_lists_implementing_types() {
    let rendered = render("{ pets { __typename name } }").unwrap();

    assert!(
        rendered.contains("\t\tTypename string `json:\"__typename\" types:\"Dog,Cat\"`\n"),
        "{rendered}",
    );
}

#[test]
fn add_typename_makes_an_optional_typename_field() {
    let rendered = render_with(
        &pets_schema(),
        "{ me { id } }",
        &[],
        SelectionSetOptions {
            add_typename: true,
            ..SelectionSetOptions::default()
        },
    ).unwrap();

    assert!(rendered.contains("\tTypename *string `json:\"__typename\" types:\"Query\"`\n"));
    assert!(rendered.contains("\t\tTypename *string `json:\"__typename\" types:\"User\"`\n"));
}

#[test]
fn non_optional_typename_drops_the_pointer() {
    let rendered = render_with(
        &pets_schema(),
        "{ me { id } }",
        &[],
        SelectionSetOptions {
            non_optional_typename: true,
            ..SelectionSetOptions::default()
        },
    ).unwrap();

    assert!(rendered.contains("\t\tTypename string `json:\"__typename\" types:\"User\"`\n"));
}

#[test]
fn union_typename_is_omitted() {
    let rendered = render("{ search(term: \"x\") { __typename } }").unwrap();

    assert!(!rendered.contains("Typename"), "{rendered}");
}

#[test]
fn spreads_on_abstract_types_become_branches() {
    let rendered = render(r#"
        query Search {
          search(term: "rex") {
            ...DogFields
            ... on User { id }
          }
        }
        fragment DogFields on Dog { barks }
    "#).unwrap();

    assert_eq!(
        rendered,
        "struct {\n\
        \tSearch []*struct {\n\
        \t\tOnDog *struct {\n\
        \t\t\tDogFieldsFragment\n\
        \t\t} `graphql:\"... on Dog\"`\n\
        \t\tOnUser *struct {\n\
        \t\t\tId string `json:\"id\"`\n\
        \t\t} `graphql:\"... on User\"`\n\
        \t} `json:\"search\"`\n\
        }",
    );
}

#[test]
fn spreads_on_object_types_are_embedded() {
    let rendered = render(r#"
        query Me { me { id ...UserFields } }
        fragment UserFields on User { name }
    "#).unwrap();

    assert_eq!(
        rendered,
        "struct {\n\
        \tMe *struct {\n\
        \t\tId string `json:\"id\"`\n\
        \t\tUserFieldsFragment\n\
        \t} `json:\"me\"`\n\
        }",
    );
}

#[test]
fn inline_fragments_on_the_parent_type_are_flattened() {
    let rendered = render("{ me { ... on User { id } ... { name } } }").unwrap();

    assert!(rendered.contains("\t\tId string `json:\"id\"`\n"), "{rendered}");
    assert!(rendered.contains("\t\tName *string `json:\"name\"`\n"), "{rendered}");
    assert!(!rendered.contains("OnUser"), "{rendered}");
}

#[test]
fn repeated_spreads_are_embedded_once() {
    let rendered = render(r#"
        query Me { me { ...UserFields ...UserFields } }
        fragment UserFields on User { name }
    "#).unwrap();

    assert_eq!(rendered.matches("UserFieldsFragment").count(), 1);
}

#[test]
fn external_spreads_use_the_namespace() {
    let external = LoadedFragment::from_document(
        &document("fragment UserFields on User { name }"),
        true,
    );
    let rendered = render_with(
        &pets_schema(),
        "query Me { me { ...UserFields } }",
        &external,
        SelectionSetOptions {
            namespaced_import_name: Some("types"),
            ..SelectionSetOptions::default()
        },
    ).unwrap();

    assert!(rendered.contains("\t\ttypes.UserFieldsFragment\n"), "{rendered}");
}

#[test]
fn aliases_record_the_original_field() {
    let rendered = render("{ me { handle: name } }").unwrap();

    assert!(
        rendered.contains("\t\tHandle *string `json:\"handle\" originalField:\"name\"`\n"),
        "{rendered}",
    );
}

#[test]
fn conditional_fields_are_optional() {
    let rendered = render("query Q($b: Boolean!) { me { id @include(if: $b) } }").unwrap();

    assert!(rendered.contains("\t\tId *string `json:\"id\"`\n"), "{rendered}");
}

#[test]
fn conditional_lists_stay_slices() {
    let rendered = render("query Q($b: Boolean!) { pets @skip(if: $b) { name } }").unwrap();

    assert!(rendered.contains("\tPets []struct {\n"), "{rendered}");
}

#[test]
fn repeated_fields_merge_their_selections() {
    let rendered = render("{ me { id } me { name } }").unwrap();

    assert_eq!(rendered.matches("Me *struct").count(), 1);
    assert!(rendered.contains("\t\tId string `json:\"id\"`\n"), "{rendered}");
    assert!(rendered.contains("\t\tName *string `json:\"name\"`\n"), "{rendered}");
}

#[test]
fn unknown_fields_are_skipped() {
    let rendered = render("{ me { id nope } }").unwrap();

    assert!(!rendered.contains("Nope"), "{rendered}");
    assert!(rendered.contains("\t\tId string `json:\"id\"`\n"), "{rendered}");
}

#[test]
fn unknown_inline_fragment_type_is_an_error() {
    let err = render("{ me { ... on Nope { id } } }").unwrap_err();

    assert!(matches!(
        err,
        CodegenError::UnknownType { ref type_name } if type_name == "Nope",
    ));
}

#[test]
fn avoid_optionals_drops_pointers() {
    let rendered = render_with(
        &pets_schema(),
        "{ me { name } }",
        &[],
        SelectionSetOptions {
            avoid_optionals: true,
            ..SelectionSetOptions::default()
        },
    ).unwrap();

    assert_eq!(
        rendered,
        "struct {\n\
        \tMe struct {\n\
        \t\tName string `json:\"name\"`\n\
        \t} `json:\"me\"`\n\
        }",
    );
}

#[test]
fn recursive_list_fields() {
    let rendered = render("{ me { friends { id } } }").unwrap();

    assert!(
        rendered.contains(
            "\t\tFriends []struct {\n\t\t\tId string `json:\"id\"`\n\t\t} `json:\"friends\"`\n",
        ),
        "{rendered}",
    );
}

#[test]
fn interface_fields_resolve_against_the_interface() {
    let rendered = render("{ node(id: \"1\") { id } }").unwrap();

    assert!(rendered.contains("\tNode *struct {\n\t\tId string `json:\"id\"`\n"), "{rendered}");
}

#[test]
fn union_branches_carry_their_own_typename() {
    let rendered = render(r#"
        {
          search(term: "x") {
            ... on Dog { __typename barks }
            ... on User { __typename id }
          }
        }
    "#).unwrap();

    assert_eq!(
        rendered,
        "struct {\n\
        \tSearch []*struct {\n\
        \t\tOnDog *struct {\n\
        \t\t\tTypename string `json:\"__typename\" types:\"Dog\"`\n\
        \t\t\tBarks bool `json:\"barks\"`\n\
        \t\t} `graphql:\"... on Dog\"`\n\
        \t\tOnUser *struct {\n\
        \t\t\tTypename string `json:\"__typename\" types:\"User\"`\n\
        \t\t\tId string `json:\"id\"`\n\
        \t\t} `graphql:\"... on User\"`\n\
        \t} `json:\"search\"`\n\
        }",
    );
}

#[test]
fn add_typename_reaches_interface_branches() {
    let rendered = render_with(
        &pets_schema(),
        "{ pets { ... on Dog { barks } } }",
        &[],
        SelectionSetOptions {
            add_typename: true,
            ..SelectionSetOptions::default()
        },
    ).unwrap();

    assert!(
        rendered.contains("\t\tTypename *string `json:\"__typename\" types:\"Dog,Cat\"`\n"),
        "{rendered}",
    );
    assert!(
        rendered.contains(
            "\t\tOnDog *struct {\n\
            \t\t\tTypename *string `json:\"__typename\" types:\"Dog\"`\n\
            \t\t\tBarks bool `json:\"barks\"`\n\
            \t\t} `graphql:\"... on Dog\"`\n",
        ),
        "{rendered}",
    );
}

#[test]
fn typename_in_flattened_fragments_belongs_to_the_parent() {
    let rendered = render("{ me { ... { __typename } id } }").unwrap();

    assert!(
        rendered.contains("\t\tTypename string `json:\"__typename\" types:\"User\"`\n"),
        "{rendered}",
    );
    assert_eq!(rendered.matches("Typename").count(), 1);
}
