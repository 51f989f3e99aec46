//! grime-core: Core types, traits, errors, and config for the Grime analysis engine
//!
//! This crate carries everything the analysis crate builds on:
//! - Types: file descriptors, the issue taxonomy, source spans
//! - Errors: one enum per subsystem, `thiserror` only, zero `anyhow`
//! - Config: engine options with serde defaults and TOML loading
//! - Traits: cooperative cancellation
//! - Trace: `tracing` subscriber setup for binaries and tests

pub mod config;
pub mod errors;
pub mod trace;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::EngineConfig;
pub use errors::{
    AnalysisError, AnalyzerError, ConfigError, GrimeErrorCode, ParseError,
};
pub use traits::{Cancellable, CancellationToken};
pub use types::{
    issue_id, now_ms, EffortLevel, FileCategory, FileInfo, Issue, IssueKind, Severity,
    SourceSpan,
};
