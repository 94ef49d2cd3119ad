pub(crate) mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

/// A subcommand that reports its outcome as text and an exit code rather
/// than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "gqlgen")]
pub(crate) enum CommandEnum {
    /// Generate every output file listed in a codegen config.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}
