//! Parse errors: hard failures that prevent analyzing a file.

use std::path::{Path, PathBuf};

use super::error_code::{self, GrimeErrorCode};

/// Errors that prevent producing a navigable tree for a file.
///
/// Syntax problems short of these are soft diagnostics carried on the
/// parsed tree, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No grammar for extension of {path}")]
    UnsupportedExtension { path: PathBuf },

    #[error("Grammar for {language} rejected: {message}")]
    Language {
        language: &'static str,
        message: String,
    },

    #[error("Parser produced no tree for {path}")]
    Unparsable { path: PathBuf },
}

impl ParseError {
    /// The file the error refers to, when one is known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::UnsupportedExtension { path }
            | Self::Unparsable { path } => Some(path),
            Self::Language { .. } => None,
        }
    }
}

impl GrimeErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
