use crate::file_reader;
use graphql_codegen_go::GoPluginConfig;
use graphql_codegen_go::Plugin;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ConfigLoadError>;

/// One path or a list of paths. Each path may name a file or a directory.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum PathList {
    One(PathBuf),
    Many(Vec<PathBuf>),
}
impl PathList {
    pub(crate) fn paths(&self) -> &[PathBuf] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths.as_slice(),
        }
    }

    fn resolve_against(self, base_dir: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        match self {
            Self::One(path) => Self::One(resolve(path)),
            Self::Many(paths) => Self::Many(paths.into_iter().map(resolve).collect()),
        }
    }
}
impl std::default::Default for PathList {
    fn default() -> Self {
        Self::Many(vec![])
    }
}

/// A single generated file and the plugins that produce it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OutputConfig {
    /// Plugin options for this file only, merged over the shared options.
    #[serde(default)]
    pub config: serde_yaml::Mapping,

    #[serde(default)]
    pub external_fragments: PathList,

    pub plugins: Vec<Plugin>,
}

/// The contents of a codegen config file.
///
/// Relative paths are resolved against the directory containing the config
/// file, so generation does not depend on the working directory.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub(crate) struct CodegenConfig {
    /// Plugin options shared by every output.
    #[serde(default)]
    pub config: serde_yaml::Mapping,

    #[serde(default)]
    pub documents: PathList,

    pub generates: IndexMap<PathBuf, OutputConfig>,
    pub schema: PathList,
}
impl CodegenConfig {
    pub(crate) fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| ConfigLoadError::ConfigFileReadError(Box::new(err)))?;
        let base_dir = file_path.parent().unwrap_or(Path::new(""));

        Self::parse(Some(file_path), content.as_str())
            .map(|config| config.resolve_paths(base_dir))
    }

    pub(crate) fn parse(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|err| ConfigLoadError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                err,
            })?;

        if config.schema.paths().is_empty() {
            return Err(ConfigLoadError::MissingSchema);
        }

        if config.generates.is_empty() {
            return Err(ConfigLoadError::NoOutputs);
        }

        log::debug!(
            "Loaded codegen config with {} outputs.",
            config.generates.len(),
        );
        Ok(config)
    }

    fn resolve_paths(self, base_dir: &Path) -> Self {
        Self {
            config: self.config,
            documents: self.documents.resolve_against(base_dir),
            generates: self.generates.into_iter()
                .map(|(output_file, output)| (
                    base_dir.join(output_file),
                    OutputConfig {
                        external_fragments: output.external_fragments.resolve_against(base_dir),
                        ..output
                    },
                ))
                .collect(),
            schema: self.schema.resolve_against(base_dir),
        }
    }

    /// The plugin options for `output_file`: its own options merged key by
    /// key over the shared ones.
    pub(crate) fn plugin_config(
        &self,
        output_file: &Path,
        output: &OutputConfig,
    ) -> Result<GoPluginConfig> {
        let mut merged = self.config.clone();
        for (key, value) in &output.config {
            merged.insert(key.clone(), value.clone());
        }

        serde_yaml::from_value(serde_yaml::Value::Mapping(merged))
            .map_err(|err| ConfigLoadError::InvalidPluginConfig {
                output_file: output_file.to_path_buf(),
                err,
            })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigLoadError {
    #[error("{0}")]
    ConfigFileReadError(Box<file_reader::ReadContentError>),

    #[error("Invalid plugin config for {output_file:?}: {err}")]
    InvalidPluginConfig {
        output_file: PathBuf,
        err: serde_yaml::Error,
    },

    #[error("The codegen config must list a `schema`.")]
    MissingSchema,

    #[error("The codegen config must list at least one file under `generates`.")]
    NoOutputs,

    #[error(
        "Error parsing codegen config{}: {err}",
        file_path.as_ref().map(|f| format!(" {f:?}")).unwrap_or_default(),
    )]
    ParseError {
        file_path: Option<PathBuf>,
        err: serde_yaml::Error,
    },
}
