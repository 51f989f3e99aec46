//! Parsed-tree handles.

use std::sync::Arc;

use tree_sitter::{Node, Tree};

use grime_core::types::SourceSpan;

use super::diagnostics::{span_of, SyntaxDiagnostic};
use super::language::Language;

/// Maximum characters kept in an issue snippet.
const MAX_SNIPPET_LEN: usize = 200;

/// A cheaply clonable handle over one parsed file.
///
/// The tree-sitter `Tree` is refcounted and the source and diagnostics are
/// shared, so the parser arena and the engine can hold the same parse
/// without copying. Handles are short-lived: the engine evicts a file's
/// arena entry at the end of that file's iteration.
#[derive(Debug, Clone)]
pub struct ParsedTree {
    tree: Tree,
    source: Arc<str>,
    language: Language,
    diagnostics: Arc<[SyntaxDiagnostic]>,
}

impl ParsedTree {
    pub(crate) fn new(
        tree: Tree,
        source: Arc<str>,
        language: Language,
        diagnostics: Vec<SyntaxDiagnostic>,
    ) -> Self {
        Self {
            tree,
            source,
            language,
            diagnostics: diagnostics.into(),
        }
    }

    /// Root node of the tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Full source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The language the file was parsed as.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Soft diagnostics collected at parse time.
    pub fn diagnostics(&self) -> &[SyntaxDiagnostic] {
        &self.diagnostics
    }

    /// Source text of a node. Empty if the node's byte range does not fall
    /// on character boundaries.
    pub fn text_of(&self, node: &Node) -> &str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// Span of a node: 1-based lines, 0-based columns.
    pub fn span_of(&self, node: &Node) -> SourceSpan {
        span_of(node)
    }

    /// Issue snippet for a node, truncated to [`MAX_SNIPPET_LEN`] characters.
    pub fn snippet_of(&self, node: &Node) -> String {
        let text = self.text_of(node);
        if text.len() <= MAX_SNIPPET_LEN {
            return text.to_string();
        }
        let mut cut = MAX_SNIPPET_LEN;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &text[..cut])
    }
}
