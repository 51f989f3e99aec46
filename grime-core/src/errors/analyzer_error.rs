//! Analyzer errors: failures local to one (file, analyzer) pair.

use super::error_code::{self, GrimeErrorCode};

/// Errors from a single analyzer invocation.
///
/// These never abort a run and never count as parse errors; the engine logs
/// them and treats the analyzer's contribution for that file as empty.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Analyzer {analyzer} failed: {message}")]
    Failed { analyzer: String, message: String },

    #[error("Analyzer {analyzer} panicked: {message}")]
    Panicked { analyzer: String, message: String },
}

impl AnalyzerError {
    /// The name of the analyzer that failed.
    pub fn analyzer(&self) -> &str {
        match self {
            Self::Failed { analyzer, .. } | Self::Panicked { analyzer, .. } => analyzer,
        }
    }
}

impl GrimeErrorCode for AnalyzerError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYZER_ERROR
    }
}
