//! Configuration loading and management

mod settings;

pub use settings::{DatabaseSettings, GuiSettings, Settings, VoiceSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the global config directory path (~/.justdoit/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".justdoit")
    }

    /// Get the global config file path (~/.justdoit/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the global config file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::with_defaults())
        }
    }

    /// Create a configuration with default values
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Save configuration to a file, creating the parent directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Resolved task database path (settings override, else ~/.justdoit/tasks.db)
    pub fn database_path(&self) -> PathBuf {
        self.settings
            .database
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("tasks.db"))
    }
}
