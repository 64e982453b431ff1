//! Error types for theme operations

use thiserror::Error;

/// Theme error types
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Mode outside of `light` / `dark`
    #[error("Invalid theme mode: {0:?} (expected \"light\" or \"dark\")")]
    InvalidMode(String),

    /// Color literal that could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Preference file parse or serialize error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON export error
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

impl ThemeError {
    /// Check if this error was caused by caller input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidMode(_) | Self::InvalidColor(_))
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ThemeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}
