//! Shared parse context: per-language parser instances and the tree arena.

use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use grime_core::errors::ParseError;
use grime_core::types::FileInfo;

use super::diagnostics::collect_diagnostics;
use super::language::Language;
use super::types::ParsedTree;

/// Owner of the shared parse context.
///
/// One tree-sitter parser per language, created on first use and reused
/// across files, plus an arena of parsed-tree handles keyed by path. The
/// engine evicts each file's entry once it finishes with the file, so the
/// arena holds O(1) trees in steady state regardless of corpus size.
pub struct ParserManager {
    parsers: FxHashMap<Language, tree_sitter::Parser>,
    trees: FxHashMap<PathBuf, ParsedTree>,
    log_warnings: bool,
}

impl ParserManager {
    pub fn new() -> Self {
        Self::with_warning_logs(true)
    }

    /// `log_warnings` controls whether soft syntax diagnostics are logged.
    pub fn with_warning_logs(log_warnings: bool) -> Self {
        Self {
            parsers: FxHashMap::default(),
            trees: FxHashMap::default(),
            log_warnings,
        }
    }

    /// Parse a file from disk and store a handle under its path.
    ///
    /// Hard failures only: unreadable file, extension with no grammar, or
    /// the parser producing no tree. ERROR/MISSING nodes are soft; they are
    /// collected on the returned handle and the best-effort tree is still
    /// usable.
    pub fn parse(&mut self, file: &FileInfo) -> Result<ParsedTree, ParseError> {
        let source = std::fs::read_to_string(&file.path).map_err(|source| ParseError::Io {
            path: file.path.clone(),
            source,
        })?;
        self.parse_source(&source, &file.path)
    }

    /// Parse source text under a virtual path, without touching the
    /// filesystem. Replaces any previous handle at that path.
    pub fn parse_source(
        &mut self,
        source: &str,
        virtual_path: &Path,
    ) -> Result<ParsedTree, ParseError> {
        let ext = virtual_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let language =
            Language::from_extension(ext).ok_or_else(|| ParseError::UnsupportedExtension {
                path: virtual_path.to_path_buf(),
            })?;

        let parser = self.parser_for(language)?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Unparsable {
                path: virtual_path.to_path_buf(),
            })?;

        let diagnostics = collect_diagnostics(tree.root_node());
        if !diagnostics.is_empty() && self.log_warnings {
            warn!(
                path = %virtual_path.display(),
                count = diagnostics.len(),
                "syntax errors in parse tree; continuing with best-effort tree"
            );
        }

        let handle = ParsedTree::new(tree, Arc::from(source), language, diagnostics);
        self.trees
            .insert(virtual_path.to_path_buf(), handle.clone());
        Ok(handle)
    }

    /// Look up the stored handle for a path.
    pub fn tree_for(&self, path: &Path) -> Option<&ParsedTree> {
        self.trees.get(path)
    }

    /// Release the arena entry for one path. Returns whether one existed.
    pub fn evict(&mut self, path: &Path) -> bool {
        self.trees.remove(path).is_some()
    }

    /// Release every arena entry. Parser instances are kept.
    pub fn clear_all(&mut self) {
        self.trees.clear();
    }

    /// Number of live arena entries.
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn parser_for(&mut self, language: Language) -> Result<&mut tree_sitter::Parser, ParseError> {
        match self.parsers.entry(language) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut parser = tree_sitter::Parser::new();
                parser
                    .set_language(&language.grammar())
                    .map_err(|e| ParseError::Language {
                        language: language.name(),
                        message: e.to_string(),
                    })?;
                Ok(entry.insert(parser))
            }
        }
    }
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}
