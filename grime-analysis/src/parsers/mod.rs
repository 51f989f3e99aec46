//! Tree-sitter parser subsystem: shared parse context, per-file tree
//! handles, and soft syntax diagnostics.

pub mod diagnostics;
pub mod language;
pub mod manager;
pub mod types;

pub use diagnostics::{DiagnosticKind, SyntaxDiagnostic};
pub use language::Language;
pub use manager::ParserManager;
pub use types::ParsedTree;
