//! Persisted preferences
//!
//! Stored as pretty JSON in the platform config directory. A missing or
//! unreadable file is never fatal: the calculator starts with defaults.

use crate::error::ConfigError;
use crate::session::DEFAULT_ERROR_MARKER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "smartcalc";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Shown in place of a result when evaluation fails
    pub error_marker: String,
    pub window_width: f32,
    pub window_height: f32,
    pub display_font_size: f32,
    pub button_font_size: f32,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            window_width: 300.0,
            window_height: 400.0,
            display_font_size: 24.0,
            button_font_size: 18.0,
        }
    }
}

impl CalcConfig {
    pub fn config_path() -> PathBuf {
        config_dir(APP_NAME).join("config.json")
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Config directory for an app, or the working directory if the platform has none.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "smartcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("calccore-test-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join("config.json");
        let config = CalcConfig {
            error_marker: "Oops".to_string(),
            window_width: 320.0,
            ..CalcConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(CalcConfig::load_from(&path).unwrap(), config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = scratch_dir("partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "error_marker": "E" }"#).unwrap();

        let config = CalcConfig::load_from(&path).unwrap();
        assert_eq!(config.error_marker, "E");
        assert_eq!(config.window_height, 400.0);
        assert_eq!(config.button_font_size, 18.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let dir = scratch_dir("errors");
        std::fs::create_dir_all(&dir).unwrap();

        let missing = CalcConfig::load_from(&dir.join("nope.json"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(CalcConfig::load_from(&bad), Err(ConfigError::Json(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_path_name() {
        assert!(CalcConfig::config_path().ends_with("config.json"));
    }
}
