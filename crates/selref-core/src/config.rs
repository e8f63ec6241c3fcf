use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::location::{CurrentDirLocation, FixedLocation, Location};

/// How the CLI prints parse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/selref/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelrefConfig {
    /// Base URL for relative hrefs when `--base` is not given. If unset, the
    /// current directory (as a `file:` URL) is used.
    #[serde(default)]
    pub default_base: Option<String>,
    /// Output format: "plain" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl SelrefConfig {
    /// Location for resolving hrefs: `override_base`, then `default_base`,
    /// then the working directory.
    pub fn location(&self, override_base: Option<&str>) -> Box<dyn Location> {
        match override_base.or(self.default_base.as_deref()) {
            Some(base) => Box::new(FixedLocation::new(base)),
            None => Box::new(CurrentDirLocation),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("selref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SelrefConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SelrefConfig> {
    if !path.exists() {
        let default_cfg = SelrefConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SelrefConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = SelrefConfig::default();
        assert!(cfg.default_base.is_none());
        assert_eq!(cfg.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SelrefConfig {
            default_base: Some("https://example.com/docs/".to_string()),
            output: OutputFormat::Json,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SelrefConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: SelrefConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SelrefConfig::default());
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<SelrefConfig>(r#"output = "yaml""#).is_err());
    }

    #[test]
    fn location_precedence() {
        let cfg = SelrefConfig {
            default_base: Some("http://cfg/".to_string()),
            output: OutputFormat::Plain,
        };
        assert_eq!(cfg.location(Some("http://flag/")).href(), "http://flag/");
        assert_eq!(cfg.location(None).href(), "http://cfg/");
        assert!(SelrefConfig::default()
            .location(None)
            .href()
            .starts_with("file:///"));
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, SelrefConfig::default());
        assert!(path.exists());

        fs::write(&path, "default_base = \"http://y.com/\"\noutput = \"json\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.default_base.as_deref(), Some("http://y.com/"));
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn load_or_init_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_base = [").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
