use crate::commands::{CommandContext, CommandExecutor};
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

pub struct GenerateConfigCommand {
    path: Option<PathBuf>,
}

impl GenerateConfigCommand {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CommandExecutor for GenerateConfigCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        let path = self.path.unwrap_or_else(Config::config_path);
        Config::default().save_to(&path)?;
        println!("Generated default configuration at: {}", path.display());
        Ok(())
    }
}
