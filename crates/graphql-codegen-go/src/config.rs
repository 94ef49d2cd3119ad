use crate::scalars;
use crate::DeclarationBlockConfig;
use crate::NameConverter;
use crate::NamingConvention;
use crate::ScalarsMap;
use crate::SchemaIndex;
use indexmap::IndexMap;

/// How the values of one enum are generated.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum EnumValuesConfig {
    /// `"import/path#Type"`: the enum is an alias for a type declared in
    /// another Go package.
    External(String),

    /// Overrides the string value of individual enum values.
    Values(IndexMap<String, String>),
}

/// An `"import/path#Type"` reference to a type declared elsewhere.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalType {
    pub import_path: String,
    pub type_name: String,
}
impl ExternalType {
    pub fn parse(mapper: &str) -> Option<Self> {
        let (import_path, type_name) = mapper.split_once('#')?;
        if import_path.is_empty() || type_name.is_empty() {
            return None;
        }

        Some(Self {
            import_path: import_path.to_string(),
            type_name: type_name.to_string(),
        })
    }

    /// The package identifier Go code uses to refer to the import: the last
    /// path segment.
    pub fn package_name(&self) -> &str {
        self.import_path.rsplit('/').next().unwrap_or(&self.import_path)
    }

    pub fn qualified_type_name(&self) -> String {
        format!("{}.{}", self.package_name(), self.type_name)
    }

    pub fn import_line(&self) -> String {
        format!("import \"{}\"", self.import_path)
    }
}

/// User-facing options shared by every Go plugin. Keys are camelCase in
/// configuration files and every option has a default.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoPluginConfig {
    pub add_typename: bool,
    pub avoid_optionals: bool,
    pub const_enums: bool,
    pub dedupe_operation_suffix: bool,
    pub enum_values: IndexMap<String, EnumValuesConfig>,
    pub enums_as_types: bool,

    /// Raw lines added to the file's prepend section, e.g.
    /// `import "time"`.
    pub imports: Vec<String>,

    pub namespaced_import_name: Option<String>,
    pub naming_convention: NamingConvention,
    pub non_optional_typename: bool,

    /// Go package name of the generated file. Derived from the output path
    /// when absent.
    pub package: Option<String>,

    pub scalars: IndexMap<String, String>,
    pub types_prefix: String,
}
impl GoPluginConfig {
    pub fn external_enum(&self, enum_name: &str) -> Option<ExternalType> {
        match self.enum_values.get(enum_name)? {
            EnumValuesConfig::External(mapper) => ExternalType::parse(mapper),
            EnumValuesConfig::Values(_) => None,
        }
    }

    /// The configured string for one enum value, if overridden.
    pub fn enum_value_override(&self, enum_name: &str, value: &str) -> Option<&str> {
        match self.enum_values.get(enum_name)? {
            EnumValuesConfig::Values(values) => values.get(value).map(String::as_str),
            EnumValuesConfig::External(_) => None,
        }
    }

    /// `import` lines for every enum mapped to an external Go type, in
    /// configuration order.
    pub fn enum_imports(&self) -> Vec<String> {
        self.enum_values.keys()
            .filter_map(|enum_name| self.external_enum(enum_name))
            .map(|external| external.import_line())
            .collect()
    }

    pub fn name_converter(&self) -> NameConverter {
        NameConverter::new(self.naming_convention, self.types_prefix.as_str())
    }

    pub fn namespaced_import_name(&self) -> Option<&str> {
        self.namespaced_import_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Resolves the raw options into the values the generators work with for
    /// a single invocation.
    pub fn parse(&self, schema: Option<&SchemaIndex>) -> ParsedGoConfig {
        ParsedGoConfig {
            declaration_block: DeclarationBlockConfig::default(),
            names: self.name_converter(),
            scalars: scalars::build_scalars_map(schema, &self.scalars),
        }
    }
}

/// Configuration derived from [`GoPluginConfig`] once per invocation.
#[derive(Clone, Debug)]
pub struct ParsedGoConfig {
    pub declaration_block: DeclarationBlockConfig,
    pub names: NameConverter,
    pub scalars: ScalarsMap,
}
