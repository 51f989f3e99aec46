//! Stable machine-readable error codes.

/// Trait implemented by every Grime error type.
///
/// Codes are stable identifiers for downstream consumers (reporting layers,
/// log filters); the `Display` message may change, the code must not.
pub trait GrimeErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const PARSE_ERROR: &str = "GRIME_PARSE_ERROR";
pub const ANALYZER_ERROR: &str = "GRIME_ANALYZER_ERROR";
pub const ANALYSIS_ERROR: &str = "GRIME_ANALYSIS_ERROR";
pub const CONFIG_ERROR: &str = "GRIME_CONFIG_ERROR";
pub const CANCELLED: &str = "GRIME_CANCELLED";
