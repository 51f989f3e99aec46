//! Core data types shared across the engine.

pub mod files;
pub mod issues;

pub use files::{FileCategory, FileInfo};
pub use issues::{issue_id, now_ms, EffortLevel, Issue, IssueKind, Severity, SourceSpan};
