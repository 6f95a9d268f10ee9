use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "DUTIP_CONFIG_PATH";

/// Names (or paths) of the external programs the tool drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Reads and writes default-application associations (`duti`).
    pub association: String,
    /// Spotlight metadata search (`mdfind`).
    pub metadata_search: String,
    /// AppleScript bridge used to ask for an application's bundle id (`osascript`).
    pub scripting_bridge: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            association: "duti".to_string(),
            metadata_search: "mdfind".to_string(),
            scripting_bridge: "osascript".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
}

impl Config {
    /// Load from `custom_path`, or the default location. A missing file yields defaults.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let config_path = custom_path.unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        toml::from_str::<Config>(&contents).with_context(|| {
            format!("Failed to parse configuration at {}", config_path.display())
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        if let Ok(override_path) = env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(override_path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dutip")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ConfigEnvGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tools.association, "duti");
        assert_eq!(config.tools.metadata_search, "mdfind");
        assert_eq!(config.tools.scripting_bridge, "osascript");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("[tools]"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[tools]\nassociation = \"/opt/homebrew/bin/duti\"\n").unwrap();
        assert_eq!(config.tools.association, "/opt/homebrew/bin/duti");
        assert_eq!(config.tools.metadata_search, "mdfind");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tools = 3").unwrap();

        let err = Config::load(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_save_to_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.tools.scripting_bridge = "/usr/bin/osascript".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load(Some(path)).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let _guard = ConfigEnvGuard::set(&path);

        assert_eq!(Config::config_path(), path);
    }

    #[test]
    #[serial]
    fn test_config_path_default_location() {
        let _guard = ConfigEnvGuard::unset();
        assert!(Config::config_path().ends_with("dutip/config.toml"));
    }
}
