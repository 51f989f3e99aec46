//! Pattern analyzers.
//!
//! Each analyzer implements [`PatternAnalyzer`] and walks the parse tree of
//! one file at a time. The engine owns scheduling, category filtering, and
//! failure isolation; analyzers only detect and describe.

pub mod code_quality;
pub mod traits;

pub use code_quality::CodeQualityAnalyzer;
pub use traits::PatternAnalyzer;
