use crate::codegen_config::CodegenConfig;
use crate::document_loader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_codegen_go::PluginInfo;
use graphql_codegen_go::PluginOutput;
use indexmap::IndexSet;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value="codegen.yml",
        help="Path to the codegen config file.",
        long,
        short='c',
    )]
    config: PathBuf,

    #[arg(
        help="Print generated files instead of writing them.",
        long,
    )]
    dry_run: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct GenerateSummary {
    pub num_documents: usize,
    pub output_files: Vec<PathBuf>,

    /// Rendered files, populated only for dry runs.
    pub rendered: Vec<(PathBuf, String)>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let summary = match self.generate() {
            Ok(summary) => summary,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Code generation failed: {err:#}",
                output_utils::RED_X,
            )),
        };

        let rendered = summary.rendered.iter()
            .map(|(output_file, content)| format!("// {}\n{content}\n", output_file.display()))
            .collect::<String>();

        CommandResult::stdout(format_args!(
            concat!(
                "{}{} Generated {} files from {} documents:\n",
                "{}",
            ),
            rendered,
            output_utils::GREEN_CHECK,
            summary.output_files.len(),
            summary.num_documents,
            summary.output_files.iter()
                .map(|path| format!("  * {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}
impl GenerateCmd {
    pub(crate) fn generate(&self) -> anyhow::Result<GenerateSummary> {
        let config = CodegenConfig::from_file(&self.config)?;
        let graphql_file_exts = document_loader::normalize_file_exts(&self.graphql_file_exts);

        let schema = document_loader::load_schema(config.schema.paths(), &graphql_file_exts)
            .context("Unable to load the schema")?;
        let documents = document_loader::load_documents(config.documents.paths(), &graphql_file_exts)
            .context("Unable to load documents")?;
        log::debug!("Loaded {} documents.", documents.len());

        let mut summary = GenerateSummary {
            num_documents: documents.len(),
            ..GenerateSummary::default()
        };

        for (output_file, output) in &config.generates {
            log::info!("Generating {output_file:?}...");

            let plugin_config = config.plugin_config(output_file, output)?;
            let external_fragments = document_loader::load_external_fragments(
                output.external_fragments.paths(),
                &graphql_file_exts,
            ).with_context(|| format!("Unable to load external fragments for {output_file:?}"))?;
            let info = PluginInfo {
                external_fragments,
                output_file: Some(output_file.to_owned()),
            };

            let mut plugin_outputs = vec![];
            for plugin in &output.plugins {
                plugin_outputs.push(
                    plugin.run(&schema, &documents, &plugin_config, &info)
                        .with_context(|| format!("The `{plugin}` plugin failed for {output_file:?}"))?
                );
            }

            let rendered = merge_plugin_outputs(&plugin_outputs).render();
            if self.dry_run {
                summary.rendered.push((output_file.to_owned(), rendered));
            } else {
                if let Some(parent_dir) = output_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent_dir)
                        .with_context(|| format!("Unable to create {parent_dir:?}"))?;
                }
                std::fs::write(output_file, rendered)
                    .with_context(|| format!("Unable to write {output_file:?}"))?;
            }
            summary.output_files.push(output_file.to_owned());
        }

        Ok(summary)
    }
}

/// Combines the outputs of the plugins writing one file. Prepend lines are
/// deduplicated keeping their first position, so every plugin may emit the
/// package clause.
pub(crate) fn merge_plugin_outputs(outputs: &[PluginOutput]) -> PluginOutput {
    let prepend = outputs.iter()
        .flat_map(|output| output.prepend.iter().cloned())
        .collect::<IndexSet<_>>();

    let content = outputs.iter()
        .map(|output| output.content.trim_end())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    PluginOutput {
        content,
        prepend: prepend.into_iter().collect(),
    }
}

#[cfg(test)]
impl GenerateCmd {
    pub(crate) fn for_config(config: PathBuf, dry_run: bool) -> Self {
        Self {
            config,
            dry_run,
            graphql_file_exts: vec![
                "graphql".to_string(),
                "graphqls".to_string(),
                "gql".to_string(),
            ],
        }
    }
}
