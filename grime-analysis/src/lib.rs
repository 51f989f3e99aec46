//! grime-analysis: the Grime code-analysis engine
//!
//! A pipeline that parses source files into syntax trees, runs pluggable
//! pattern analyzers against each tree, tolerates partial failure, and
//! aggregates the results with performance instrumentation:
//! - Parsers: shared tree-sitter parse context with an explicit tree arena
//! - Analyzers: the `PatternAnalyzer` contract and the reference
//!   code-quality implementation
//! - Engine: per-file orchestration, error policy, progress, metrics
//! - Aggregate: pure partitioning of issues into file/kind/category buckets

pub mod aggregate;
pub mod analyzers;
pub mod engine;
pub mod parsers;

// Re-exports for convenience
pub use aggregate::{aggregate, group_by_severity, IssueCollection};
pub use analyzers::{CodeQualityAnalyzer, PatternAnalyzer};
pub use engine::{
    AnalysisEngine, AnalysisResult, FileMetrics, PerformanceSummary, ProgressCallback,
    ProgressEvent,
};
pub use parsers::{Language, ParsedTree, ParserManager, SyntaxDiagnostic};
