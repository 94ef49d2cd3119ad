use crate::SchemaIndex;
use indexmap::IndexMap;

/// Maps GraphQL scalar names to the Go type used to represent them.
pub type ScalarsMap = IndexMap<String, String>;

/// Go type used for custom scalars that have no configured mapping.
pub const DEFAULT_CUSTOM_SCALAR_TYPE: &str = "any";

/// The built-in GraphQL scalars and their Go representations.
pub fn default_go_scalars() -> ScalarsMap {
    IndexMap::from([
        ("ID".to_string(), "string".to_string()),
        ("String".to_string(), "string".to_string()),
        ("Boolean".to_string(), "bool".to_string()),
        ("Int".to_string(), "int".to_string()),
        ("Float".to_string(), "float64".to_string()),
    ])
}

/// Builds the scalar table for one generator invocation: built-in scalars,
/// then every custom scalar declared in the schema (as
/// [`DEFAULT_CUSTOM_SCALAR_TYPE`]), then user overrides.
pub fn build_scalars_map(
    schema: Option<&SchemaIndex>,
    overrides: &IndexMap<String, String>,
) -> ScalarsMap {
    let mut scalars = default_go_scalars();

    if let Some(schema) = schema {
        for scalar_name in schema.custom_scalar_names() {
            scalars.entry(scalar_name.to_string())
                .or_insert_with(|| DEFAULT_CUSTOM_SCALAR_TYPE.to_string());
        }
    }

    for (scalar_name, go_type) in overrides {
        scalars.insert(scalar_name.to_owned(), go_type.to_owned());
    }

    scalars
}
