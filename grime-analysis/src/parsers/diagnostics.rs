//! Soft syntax diagnostics: ERROR and MISSING nodes in a best-effort tree.
//!
//! These do not fail a parse. The tree is still navigable and still handed
//! to analyzers; the diagnostics ride along on the handle.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use grime_core::types::SourceSpan;

/// What the parser did at a diagnostic site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The parser recovered around unparseable input.
    Error,
    /// The parser inserted a zero-width token to recover.
    Missing,
}

/// One soft diagnostic collected at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxDiagnostic {
    pub kind: DiagnosticKind,
    pub span: SourceSpan,
}

/// Collect all ERROR and MISSING nodes under `root`.
pub fn collect_diagnostics(root: Node) -> Vec<SyntaxDiagnostic> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect(node: Node, out: &mut Vec<SyntaxDiagnostic>) {
    if node.is_error() {
        out.push(SyntaxDiagnostic {
            kind: DiagnosticKind::Error,
            span: span_of(&node),
        });
    } else if node.is_missing() {
        out.push(SyntaxDiagnostic {
            kind: DiagnosticKind::Missing,
            span: span_of(&node),
        });
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect(child, out);
        }
    }
}

/// Span of a tree-sitter node: 1-based lines, 0-based columns.
pub fn span_of(node: &Node) -> SourceSpan {
    let start = node.start_position();
    let end = node.end_position();
    SourceSpan {
        start_line: start.row + 1,
        end_line: end.row + 1,
        start_column: start.column,
        end_column: end.column,
    }
}
