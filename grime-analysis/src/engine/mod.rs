//! The analysis engine.
//!
//! Owns file-to-file sequencing, failure policy, and instrumentation.
//! Parsing and detection live elsewhere; this module decides what happens
//! when they fail and measures how long they take.

pub mod metrics;
pub mod pipeline;
pub mod progress;
pub mod types;

pub use metrics::{format_duration, FileMetrics, PerformanceSummary};
pub use pipeline::AnalysisEngine;
pub use progress::{ProgressCallback, ProgressEvent};
pub use types::AnalysisResult;
