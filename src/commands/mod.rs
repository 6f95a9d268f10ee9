use crate::cli::Cli;
use anyhow::Result;

mod completions;
mod context;
mod generate_config;
mod list_apps;
mod reassign;
mod status;
mod version;

pub use completions::CompletionsCommand;
pub use context::CommandContext;
pub use generate_config::GenerateConfigCommand;
pub use list_apps::ListAppsCommand;
pub use reassign::ReassignCommand;
pub use status::StatusCommand;
pub use version::{BuildInfoCommand, BumpCommand, VersionCommand};

pub trait CommandExecutor {
    fn execute(self, ctx: &CommandContext) -> Result<()>;
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = CommandContext::new(cli.config.clone());

    if cli.bump {
        return BumpCommand::new(cli.manifest_path).execute(&ctx);
    }

    if cli.version || cli.is_bare() {
        return VersionCommand.execute(&ctx);
    }

    if cli.build_info {
        return BuildInfoCommand.execute(&ctx);
    }

    if cli.generate_config {
        return GenerateConfigCommand::new(cli.config).execute(&ctx);
    }

    if let Some(shell) = cli.completions {
        return CompletionsCommand::new(shell).execute(&ctx);
    }

    if cli.status {
        return StatusCommand::new(cli.json).execute(&ctx);
    }

    if cli.list_apps {
        return ListAppsCommand::new(cli.json).execute(&ctx);
    }

    ReassignCommand::new(cli.from, cli.to, cli.yes).execute(&ctx)
}
