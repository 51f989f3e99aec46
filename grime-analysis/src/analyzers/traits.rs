//! The analyzer contract.

use grime_core::errors::AnalyzerError;
use grime_core::types::{FileCategory, FileInfo, Issue};

use crate::parsers::ParsedTree;

/// A pattern analyzer: inspects one parsed file at a time and reports issues.
///
/// Implementations must be stateless across files, or at least tolerate
/// files arriving in any order. `analyze` is called once per supported file
/// and never with a file whose category is outside `supported_categories`.
pub trait PatternAnalyzer: Send {
    /// Stable identifier, recorded as `detected_by` on every issue.
    fn name(&self) -> &str;

    /// File categories this analyzer wants to see. Files of any other
    /// category are skipped without calling `analyze`.
    fn supported_categories(&self) -> &[FileCategory];

    /// Inspect a single parsed file.
    ///
    /// Failures are isolated by the engine: an `Err` (or a panic) skips
    /// this analyzer for this file and the run continues.
    fn analyze(&self, file: &FileInfo, tree: &ParsedTree) -> Result<Vec<Issue>, AnalyzerError>;
}
