use heck::ToUpperCamelCase;

/// How GraphQL type names are converted into Go type identifiers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// Leave names exactly as they appear in the GraphQL source.
    Keep,

    #[default]
    PascalCase,
}

#[derive(Clone, Copy, Debug)]
pub struct ConvertNameOptions<'a> {
    pub suffix: Option<&'a str>,
    pub transform_underscore: bool,
    pub use_types_prefix: bool,
}
impl<'a> ConvertNameOptions<'a> {
    pub fn with_suffix(suffix: &'a str) -> Self {
        Self {
            suffix: Some(suffix),
            ..Self::default()
        }
    }

    pub fn without_types_prefix(mut self) -> Self {
        self.use_types_prefix = false;
        self
    }
}
impl std::default::Default for ConvertNameOptions<'_> {
    fn default() -> Self {
        Self {
            suffix: None,
            transform_underscore: false,
            use_types_prefix: true,
        }
    }
}

/// Converts GraphQL names into the identifiers used for generated Go
/// declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameConverter {
    naming_convention: NamingConvention,
    types_prefix: String,
}
impl NameConverter {
    pub fn new(
        naming_convention: NamingConvention,
        types_prefix: impl Into<String>,
    ) -> Self {
        Self {
            naming_convention,
            types_prefix: types_prefix.into(),
        }
    }

    pub fn convert_name(
        &self,
        name: &str,
        opts: ConvertNameOptions<'_>,
    ) -> String {
        let converted = match self.naming_convention {
            NamingConvention::Keep => name.to_string(),
            NamingConvention::PascalCase if opts.transform_underscore =>
                to_pascal_case(name),
            NamingConvention::PascalCase =>
                name.split('_')
                    .map(to_pascal_case)
                    .collect::<Vec<_>>()
                    .join("_"),
        };

        let prefix =
            if opts.use_types_prefix {
                self.types_prefix.as_str()
            } else {
                ""
            };

        format!("{prefix}{converted}{}", opts.suffix.unwrap_or_default())
    }

    /// Shorthand for [`NameConverter::convert_name`] with default options.
    pub fn convert(&self, name: &str) -> String {
        self.convert_name(name, ConvertNameOptions::default())
    }
}

/// Upper-camel-cases an identifier (`user_id` and `USER_ID` both become
/// `UserId`). Used for Go field identifiers and enum constant suffixes.
pub fn to_pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}
