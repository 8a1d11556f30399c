use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::emit::TokenFormat;
use crate::error::TokenError;

const DEFAULT_SETTINGS: &str = include_str!("../../../config/default.toml");

/// Persisted generator preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    /// Answers used when prompts are skipped, and as prompt defaults.
    pub defaults: Configuration,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Token file path. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub format: TokenFormat,
}

/// On-disk shape. The grid system stays a string until it has been checked,
/// so an unknown name is an invalid configuration rather than a parse error.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    defaults: DefaultsFile,
    #[serde(default)]
    output: OutputSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsFile {
    grid_system: String,
    base_font_size: f64,
    contrast_ratio: f64,
}

impl Settings {
    /// Load the user settings file if it exists, otherwise the built-ins.
    pub fn load() -> Result<Self, TokenError> {
        let user_path = Self::settings_path();
        if user_path.exists() {
            tracing::debug!(path = %user_path.display(), "Loading user settings");
            Self::load_from(&user_path)
        } else {
            Self::from_toml(DEFAULT_SETTINGS)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, TokenError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TokenError::Settings(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TokenError> {
        let file: SettingsFile =
            toml::from_str(toml_str).map_err(|e| TokenError::Settings(e.to_string()))?;
        let defaults = Configuration::new(
            file.defaults.grid_system.parse()?,
            file.defaults.base_font_size,
            file.defaults.contrast_ratio,
        )?;
        Ok(Self {
            defaults,
            output: file.output,
        })
    }

    /// Save to the user settings file.
    pub fn save(&self) -> Result<PathBuf, TokenError> {
        let path = Self::settings_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TokenError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TokenError::Settings(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Path to the user settings file (XDG on Linux, AppData on Windows).
    pub fn settings_path() -> PathBuf {
        ProjectDirs::from("", "", "wireframe-ui")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("wireframe-ui.toml"))
    }
}
