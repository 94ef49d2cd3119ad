use crate::EnumValuesConfig;
use crate::ExternalType;
use crate::GoPluginConfig;
use crate::NamingConvention;
use indexmap::IndexMap;

#[test]
fn every_option_defaults() {
    let config: GoPluginConfig = serde_yaml::from_str("{}").unwrap();

    assert_eq!(config, GoPluginConfig::default());
    assert!(!config.avoid_optionals);
    assert!(config.package.is_none());
    assert_eq!(config.naming_convention, NamingConvention::PascalCase);
}

#[test]
fn deserializes_camel_case_options() {
    let config: GoPluginConfig = serde_yaml::from_str(r#"
package: models
avoidOptionals: true
constEnums: true
enumsAsTypes: false
scalars:
  DateTime: time.Time
imports:
  - import "time"
addTypename: true
nonOptionalTypename: true
namespacedImportName: types
typesPrefix: Gql
namingConvention: keep
dedupeOperationSuffix: true
enumValues:
  Color: github.com/acme/colors#Color
  Role:
    ADMIN: admin
"#).unwrap();

    assert_eq!(config.package.as_deref(), Some("models"));
    assert!(config.avoid_optionals);
    assert!(config.const_enums);
    assert!(!config.enums_as_types);
    assert_eq!(config.scalars.get("DateTime").map(String::as_str), Some("time.Time"));
    assert_eq!(config.imports, vec!["import \"time\"".to_string()]);
    assert!(config.add_typename);
    assert!(config.non_optional_typename);
    assert_eq!(config.namespaced_import_name(), Some("types"));
    assert_eq!(config.types_prefix, "Gql");
    assert_eq!(config.naming_convention, NamingConvention::Keep);
    assert!(config.dedupe_operation_suffix);
    assert_eq!(
        config.enum_values.get("Color"),
        Some(&EnumValuesConfig::External("github.com/acme/colors#Color".to_string())),
    );
    assert_eq!(config.enum_value_override("Role", "ADMIN"), Some("admin"));
    assert_eq!(config.enum_value_override("Role", "USER"), None);
}

#[test]
fn external_type_mapper() {
    let external = ExternalType::parse("github.com/acme/colors#Color").unwrap();

    assert_eq!(external.package_name(), "colors");
    assert_eq!(external.qualified_type_name(), "colors.Color");
    assert_eq!(external.import_line(), "import \"github.com/acme/colors\"");

    assert_eq!(ExternalType::parse("NoHash"), None);
    assert_eq!(ExternalType::parse("#Color"), None);
}

#[test]
fn enum_imports_follow_configuration_order() {
    let config = GoPluginConfig {
        enum_values: IndexMap::from([
            ("B".to_string(), EnumValuesConfig::External("example.com/b#B".to_string())),
            ("Skip".to_string(), EnumValuesConfig::Values(IndexMap::new())),
            ("A".to_string(), EnumValuesConfig::External("example.com/a#A".to_string())),
        ]),
        ..GoPluginConfig::default()
    };

    assert_eq!(
        config.enum_imports(),
        vec![
            "import \"example.com/b\"".to_string(),
            "import \"example.com/a\"".to_string(),
        ],
    );
}

#[test]
fn scalars_map_merges_builtins_custom_scalars_and_overrides() {
    let schema = crate::tests::utils::schema(r#"
        scalar DateTime
        scalar JSON
        type Query { now: DateTime }
    "#);
    let config = GoPluginConfig {
        scalars: IndexMap::from([
            ("DateTime".to_string(), "time.Time".to_string()),
            ("ID".to_string(), "int64".to_string()),
        ]),
        ..GoPluginConfig::default()
    };

    let scalars = config.parse(Some(&schema)).scalars;
    let entries = scalars.iter()
        .map(|(name, go_type)| (name.as_str(), go_type.as_str()))
        .collect::<Vec<_>>();

    assert_eq!(entries, vec![
        ("ID", "int64"),
        ("String", "string"),
        ("Boolean", "bool"),
        ("Int", "int"),
        ("Float", "float64"),
        ("DateTime", "time.Time"),
        ("JSON", "any"),
    ]);
}
