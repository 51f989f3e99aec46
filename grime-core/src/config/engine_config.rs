//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the analysis engine.
///
/// Every field is optional so a partial config (from TOML or JSON) merges
/// over the defaults; the `effective_*` accessors apply them. The progress
/// callback and cancellation token are runtime state, registered on the
/// engine directly rather than carried here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Keep going after a file fails to parse. Default: true.
    pub continue_on_error: Option<bool>,
    /// Abort the run once this many files have failed to parse.
    /// Default: unbounded.
    pub max_errors: Option<usize>,
    /// Log recoverable failures as warnings. Default: true.
    pub log_warnings: Option<bool>,
    /// Emit a run-level performance summary after each run. Default: false.
    pub log_performance: Option<bool>,
}

impl EngineConfig {
    /// Returns whether parse failures skip the file rather than abort,
    /// defaulting to true.
    pub fn effective_continue_on_error(&self) -> bool {
        self.continue_on_error.unwrap_or(true)
    }

    /// Returns the parse-error count that aborts a run, defaulting to
    /// unbounded.
    pub fn effective_max_errors(&self) -> usize {
        self.max_errors.unwrap_or(usize::MAX)
    }

    /// Returns whether recoverable failures are logged, defaulting to true.
    pub fn effective_log_warnings(&self) -> bool {
        self.log_warnings.unwrap_or(true)
    }

    /// Returns whether the performance summary is emitted, defaulting to
    /// false.
    pub fn effective_log_performance(&self) -> bool {
        self.log_performance.unwrap_or(false)
    }

    /// Parse a config from TOML text. Unknown keys are ignored, missing
    /// keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}
