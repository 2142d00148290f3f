//! Error handling for Hearth Sandbox
//!
//! Gameplay operations never fail: rejected edits are absorbed by the
//! session. The errors here cover the edges of the crate, mainly loading
//! and validating configuration.

use thiserror::Error;

/// Main error type for Hearth Sandbox
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error for {path}: {error}")]
    ConfigIo { path: String, error: String },

    #[error("Config parse error in {path}: {error}")]
    ConfigParse { path: String, error: String },
}

/// Type alias for Results in Hearth Sandbox
pub type SandboxResult<T> = Result<T, SandboxError>;

impl SandboxError {
    /// Shorthand for a rejected config field
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        SandboxError::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for SandboxError {
    fn from(error: toml::de::Error) -> Self {
        SandboxError::ConfigParse {
            path: String::new(),
            error: error.to_string(),
        }
    }
}
