//! Configuration file management for the Haven CLI.
//!
//! Supports reading settings from `~/.config/haven/config.toml`. A missing
//! file is not an error; the CLI falls back to built-in defaults, and the
//! `--server` flag overrides everything.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Base URL of the chat service.
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Loads the configuration from an explicit path, or from the default
/// location when `path` is `None`. A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        return Ok(CliConfig::default());
    }

    let content = fs::read_to_string(&config_path).with_context(|| {
        format!(
            "Failed to read configuration file at {}",
            config_path.display()
        )
    })?;

    toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse configuration file at {}",
            config_path.display()
        )
    })
}

/// Returns the default configuration path: ~/.config/haven/config.toml
fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("haven").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.server_url.is_none());
    }

    #[test]
    fn server_url_is_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"server_url = "http://chat.internal:8080""#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(
            config.server_url.as_deref(),
            Some("http://chat.internal:8080")
        );
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server_url = [not toml").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
