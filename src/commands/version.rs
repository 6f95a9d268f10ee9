use crate::cli;
use crate::commands::{CommandContext, CommandExecutor};
use crate::version;
use anyhow::Result;
use log::info;
use std::path::PathBuf;

pub struct VersionCommand;

impl CommandExecutor for VersionCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        println!("Version: {}", crate::built_info::PKG_VERSION);
        Ok(())
    }
}

pub struct BuildInfoCommand;

impl CommandExecutor for BuildInfoCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        cli::show_build_info();
        Ok(())
    }
}

pub struct BumpCommand {
    manifest: Option<PathBuf>,
}

impl BumpCommand {
    pub fn new(manifest: Option<PathBuf>) -> Self {
        Self { manifest }
    }
}

impl CommandExecutor for BumpCommand {
    fn execute(self, _ctx: &CommandContext) -> Result<()> {
        let manifest = self.manifest.unwrap_or_else(version::default_manifest_path);
        let bump = version::bump_manifest(&manifest)?;
        info!("Bumped {} -> {}", bump.previous, bump.next);
        println!("{}", bump.next);
        println!("{}", bump.manifest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_command_rewrites_given_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("Cargo.toml");
        fs::write(&manifest, "[package]\nname = \"x\"\nversion = \"1.4.2\"\n").unwrap();

        BumpCommand::new(Some(manifest.clone()))
            .execute(&CommandContext::default())
            .unwrap();

        assert!(fs::read_to_string(manifest).unwrap().contains("version = \"1.4.3\""));
    }
}
