use crate::config::Config;
use crate::environment;
use crate::runner::SystemRunner;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CommandContext {
    config_path: Option<PathBuf>,
    runner: SystemRunner,
}

impl CommandContext {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            runner: SystemRunner::new(),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path.clone()).with_context(|| {
            self.config_path
                .as_ref()
                .map(|path| format!("Failed to load configuration from {}", path.display()))
                .unwrap_or_else(|| "Failed to load configuration".to_string())
        })
    }

    pub fn runner(&self) -> &SystemRunner {
        &self.runner
    }

    /// macOS with the configured association tool installed.
    pub fn ensure_supported(&self, config: &Config) -> Result<()> {
        environment::ensure_supported(&config.tools.association)
    }
}
