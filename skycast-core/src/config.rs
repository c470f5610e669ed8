use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Units;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key.
    pub api_key: Option<String>,

    /// Preferred unit system; metric when unset.
    pub units: Option<Units>,

    /// Location shown when none is given and IP geolocation fails.
    pub default_location: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `skycast configure` and enter your WeatherAPI.com key."
            )
        })
    }

    pub fn units_or_default(&self) -> Units {
        self.units.unwrap_or_default()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_with_hint_when_missing() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn api_key_returns_configured_value() {
        let cfg = Config { api_key: Some("KEY".to_string()), ..Default::default() };
        assert_eq!(cfg.api_key().unwrap(), "KEY");
    }

    #[test]
    fn units_default_to_metric() {
        let cfg = Config::default();
        assert_eq!(cfg.units_or_default(), Units::Metric);

        let cfg = Config { units: Some(Units::Imperial), ..Default::default() };
        assert_eq!(cfg.units_or_default(), Units::Imperial);
    }

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            units: Some(Units::Imperial),
            default_location: Some("New Delhi".to_string()),
        };

        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.units, Some(Units::Imperial));
        assert_eq!(parsed.default_location.as_deref(), Some("New Delhi"));
    }
}
