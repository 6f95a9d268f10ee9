use crate::cli::Cli;
use crate::commands::{CommandContext, CommandExecutor};
use crate::prompt::TerminalPrompt;
use crate::reassign::ReassignmentWorkflow;
use anyhow::{bail, Result};
use clap::CommandFactory;
use std::io;

pub struct ReassignCommand {
    from: Option<String>,
    to: Option<String>,
    force: bool,
}

impl ReassignCommand {
    pub fn new(from: Option<String>, to: Option<String>, force: bool) -> Self {
        Self { from, to, force }
    }
}

impl CommandExecutor for ReassignCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.load_config()?;
        ctx.ensure_supported(&config)?;

        let (from, to) = required_apps(self.from, self.to)?;

        let mut prompt = TerminalPrompt::new();
        let mut workflow =
            ReassignmentWorkflow::new(ctx.runner(), &config.tools, &mut prompt, io::stdout());
        workflow.run(&from, &to, self.force)?;
        Ok(())
    }
}

/// Both application names, or an error whose first line names the problem
/// and whose remainder is the usage line.
fn required_apps(from: Option<String>, to: Option<String>) -> Result<(String, String)> {
    let (Some(from), Some(to)) = (from, to) else {
        bail!(
            "Both -from and -to flags are required\n\n{}",
            Cli::command().render_usage()
        );
    };
    Ok((from, to))
}
