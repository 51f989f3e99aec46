//! Run-aborting errors raised by the analysis engine.

use super::error_code::{self, GrimeErrorCode};
use super::ParseError;

/// Errors that abort an entire run with no partial result.
///
/// Everything else (analyzer failures, soft syntax diagnostics, parse
/// failures under `continue_on_error`) is handled locally and does not
/// surface here.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis stopped after {error_count} errors. Last error in {file}")]
    TooManyErrors {
        error_count: usize,
        file: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to analyze {file}")]
    Halted {
        file: String,
        #[source]
        source: ParseError,
    },

    #[error("Analysis cancelled")]
    Cancelled,
}

impl GrimeErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::ANALYSIS_ERROR,
        }
    }
}
