use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Built-in scratch database filename, relative to the working directory.
pub const DEFAULT_DB_FILENAME: &str = "db.sqlite3";

/// Global configuration loaded from `~/.config/uriprobe/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Scratch database filename; if missing, `db.sqlite3` is used.
    #[serde(default)]
    pub db_filename: Option<String>,
    /// Keep the scratch file after the probe instead of removing it.
    #[serde(default)]
    pub keep_db: bool,
}

impl ProbeConfig {
    /// Effective scratch filename after applying the built-in default.
    pub fn db_filename(&self) -> &str {
        self.db_filename.as_deref().unwrap_or(DEFAULT_DB_FILENAME)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uriprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ProbeConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ProbeConfig::default();
        assert_eq!(cfg.db_filename, None);
        assert_eq!(cfg.db_filename(), "db.sqlite3");
        assert!(!cfg.keep_db);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ProbeConfig {
            db_filename: Some("probe.sqlite3".to_string()),
            keep_db: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ProbeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.db_filename.as_deref(), Some("probe.sqlite3"));
        assert!(parsed.keep_db);
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let parsed: ProbeConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.db_filename, None);
        assert!(!parsed.keep_db);
    }
}
