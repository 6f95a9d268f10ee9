use crate::cli::Cli;
use crate::commands::{CommandContext, CommandExecutor};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }
}

impl CommandExecutor for CompletionsCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        let mut command = Cli::command();
        let mut stdout = std::io::stdout();
        clap_complete::generate(self.shell, &mut command, "dutip", &mut stdout);
        Ok(())
    }
}
