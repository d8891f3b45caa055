//! Configuration management for sairyware
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/sairyware/config.toml
//!
//! The config carries the persisted theme preference. Missing or unreadable
//! storage never fails the app: it falls back to the default (dark) theme.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("sairyware");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config, falling back to defaults when storage is unavailable.
    ///
    /// A missing file, unreadable directory, or malformed TOML all yield the
    /// default config. The failure is logged, never surfaced.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config: {e:#}");
                Config::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Flip the persisted theme preference to its complement
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

/// The light/dark visual mode, persisted as "light" / "dark"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// The complement mode (light <-> dark)
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Header indicator glyph for the current mode
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeName::Light => "☀",
            ThemeName::Dark => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(Config::default().theme, ThemeName::Dark);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [ThemeName::Light, ThemeName::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_config_toggle_theme() {
        let mut config = Config::default();
        config.toggle_theme();
        assert_eq!(config.theme, ThemeName::Light);
        config.toggle_theme();
        assert_eq!(config.theme, ThemeName::Dark);
    }

    #[test]
    fn test_theme_serialized_as_lowercase() {
        let config = Config { theme: ThemeName::Light };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme = \"light\""));
    }

    #[test]
    fn test_theme_roundtrip() {
        let config = Config { theme: ThemeName::Light };
        let parsed: Config = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_garbage_config_falls_back_to_default() {
        let parsed: Result<Config, _> = toml::from_str("theme = \"solarized\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.theme, ThemeName::Dark);
    }
}
