//! Error handling for Grime.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod analyzer_error;
pub mod config_error;
pub mod error_code;
pub mod parse_error;

pub use analysis_error::AnalysisError;
pub use analyzer_error::AnalyzerError;
pub use config_error::ConfigError;
pub use error_code::GrimeErrorCode;
pub use parse_error::ParseError;
