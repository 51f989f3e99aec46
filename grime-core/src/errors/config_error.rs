//! Configuration errors.

use super::error_code::{self, GrimeErrorCode};

/// Errors raised when loading an engine config from TOML text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid engine config: {message}")]
    Parse { message: String },
}

impl GrimeErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
