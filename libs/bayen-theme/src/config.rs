//! Persisted theme preference
//!
//! ```toml
//! mode = "dark"
//! ```
//!
//! Stored at `$CONFIG_DIR/bayentv/theme.toml`. A missing file means the
//! defaults; a mode other than `light` or `dark` is an error.

use crate::error::Result;
use crate::theme::{ThemeConfig, ThemeFactory, ThemeMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
}

/// On-disk form; the mode stays text until validated
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    mode: Option<String>,
}

impl ThemeSettings {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawSettings = toml::from_str(content)?;
        let mode = match raw.mode {
            Some(mode) => mode.parse()?,
            None => ThemeMode::default(),
        };
        Ok(Self { mode })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        debug!("Loaded theme settings from {}: {}", path.display(), settings.mode);
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(&Self::default_path())
    }

    /// [`ThemeSettings::load_or_default`] for an explicit path
    pub fn load_or_default_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No theme settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                warn!("Failed to read theme settings {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Save settings, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        debug!("Saved theme settings to {}", path.display());
        Ok(())
    }

    /// Default settings file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bayentv")
            .join("theme.toml")
    }

    /// Build the theme this preference selects
    pub fn theme(&self) -> ThemeConfig {
        ThemeFactory::build(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_modes() {
        assert_eq!(
            ThemeSettings::from_toml_str("mode = \"dark\"").unwrap().mode,
            ThemeMode::Dark
        );
        assert_eq!(
            ThemeSettings::from_toml_str("mode = \"light\"").unwrap().mode,
            ThemeMode::Light
        );
        assert!(matches!(
            ThemeSettings::from_toml_str("mode = \"LIGHT\""),
            Err(ThemeError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_missing_mode_defaults_to_light() {
        assert_eq!(ThemeSettings::from_toml_str("").unwrap(), ThemeSettings::default());
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let err = ThemeSettings::from_toml_str("mode = \"sepia\"").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidMode(ref v) if v == "sepia"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ThemeSettings::from_toml_str("mode = ").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.toml");

        ThemeSettings::new(ThemeMode::Dark).save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("mode = \"dark\""));

        let loaded = ThemeSettings::load(&path).unwrap();
        assert_eq!(loaded.mode, ThemeMode::Dark);
        assert_eq!(loaded.theme(), ThemeFactory::build(ThemeMode::Dark));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = ThemeSettings::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let settings = ThemeSettings::load_or_default_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.mode, ThemeMode::Light);
    }

    #[test]
    fn test_load_or_default_keeps_invalid_mode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "mode = \"system\"").unwrap();
        assert!(ThemeSettings::load_or_default_from(&path).is_err());
    }

    #[test]
    fn test_default_path() {
        assert!(ThemeSettings::default_path().ends_with("bayentv/theme.toml"));
    }
}
