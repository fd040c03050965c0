use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    city::{CityOption, default_cities},
    model::TempScale,
};

/// Provider endpoints used when the config does not override them.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";
pub const DEFAULT_ICON_BASE: &str = "https://openweathermap.org";

/// Top-level configuration stored on disk. Everything the provider client
/// needs is injected from here at construction time; nothing is compiled in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Override for the weather endpoint base URL.
    pub base_url: Option<String>,

    /// Override for the condition-icon image host.
    pub icon_base: Option<String>,

    /// Default temperature scale; `celsius` when absent.
    pub scale: Option<TempScale>,

    /// Example TOML:
    /// [[cities]]
    /// label = "London"
    /// value = "London,GB"
    #[serde(default)]
    pub cities: Vec<CityOption>,
}

impl Config {
    /// API key, or the hint-carrying error shown on the CLI.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `citycast configure` and enter your OpenWeather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn icon_base(&self) -> &str {
        self.icon_base.as_deref().unwrap_or(DEFAULT_ICON_BASE)
    }

    pub fn scale(&self) -> TempScale {
        self.scale.unwrap_or_default()
    }

    /// Selectable cities: the configured list, or the built-in one when the
    /// config carries none.
    pub fn cities(&self) -> Vec<CityOption> {
        if self.cities.is_empty() { default_cities() } else { self.cities.clone() }
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
        let dirs = ProjectDirs::from("dev", "citycast", "citycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `citycast configure`"));
    }

    #[test]
    fn set_and_read_api_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert_eq!(cfg.api_key().unwrap(), "KEY");
    }

    #[test]
    fn endpoint_defaults_apply_when_unset() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.icon_base(), DEFAULT_ICON_BASE);
        assert_eq!(cfg.scale(), TempScale::Celsius);
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg = Config {
            base_url: Some("http://localhost:8080/".to_string()),
            scale: Some(TempScale::Fahrenheit),
            ..Config::default()
        };

        assert_eq!(cfg.base_url(), "http://localhost:8080/");
        assert_eq!(cfg.scale(), TempScale::Fahrenheit);
    }

    #[test]
    fn cities_fall_back_to_builtin_list() {
        let cfg = Config::default();
        assert!(!cfg.cities().is_empty());

        let cfg = Config {
            cities: vec![CityOption::new("Lviv", "Lviv,UA")],
            ..Config::default()
        };
        assert_eq!(cfg.cities(), vec![CityOption::new("Lviv", "Lviv,UA")]);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            scale: Some(TempScale::Kelvin),
            cities: vec![CityOption::new("London", "London,GB")],
            ..Config::default()
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back.api_key.as_deref(), Some("KEY"));
        assert_eq!(back.scale, Some(TempScale::Kelvin));
        assert_eq!(back.cities, cfg.cities);
    }
}
