//! Domain error types

use thiserror::Error;

/// Error when an unknown notification category is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid category: \"{input}\". Valid categories are: success, error, info, warning, message")]
pub struct InvalidCategoryError {
    pub input: String,
}

/// Error when an unknown text direction is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid direction: \"{input}\". Expected one of: auto, ltr, rtl")]
pub struct InvalidDirectionError {
    pub input: String,
}

/// Error when a vibration pattern cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid vibration pattern: \"{input}\". Expected comma-separated milliseconds (e.g., 200,100,200)")]
pub struct VibratePatternError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("No config directory found; set NUDGE_CONFIG to a config file path")]
    NoConfigDir,
}
