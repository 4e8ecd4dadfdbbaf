//! Domain error types

use thiserror::Error;

/// Error when a CLI argument is neither a YouTube URL nor a video ID
#[derive(Debug, Clone, Error)]
#[error("Could not extract video ID from: \"{input}\". Expected a YouTube URL (watch, youtu.be, embed, shorts) or an 11-character video ID")]
pub struct InvalidReferenceError {
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
}
