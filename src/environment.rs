use anyhow::{bail, Result};
use log::debug;
use std::path::PathBuf;

/// Refuse to run anywhere but macOS, and require the association tool on `PATH`.
pub fn ensure_supported(association_tool: &str) -> Result<()> {
    ensure_macos(std::env::consts::OS)?;
    let path = locate_tool(association_tool)?;
    debug!("Using {association_tool} at {}", path.display());
    Ok(())
}

pub fn ensure_macos(os: &str) -> Result<()> {
    if os != "macos" {
        bail!("This tool only works on macOS (running on {os})");
    }
    Ok(())
}

pub fn locate_tool(tool: &str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => Ok(path),
        Err(e) => bail!("{tool} is not installed. Please install {tool} and try again. ({e})"),
    }
}
