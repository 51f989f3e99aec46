//! Code quality analyzer: structural smells a parse tree can surface.
//!
//! Four detections, all language-agnostic across the TypeScript and
//! JavaScript grammars:
//!
//! - deeply nested conditionals (reported once, at the outermost `if`)
//! - boolean expressions with too many operators
//! - single-letter variable and parameter names
//! - commented-out code blocks

use regex::RegexSet;
use tree_sitter::Node;

use grime_core::errors::AnalyzerError;
use grime_core::types::{
    issue_id, now_ms, EffortLevel, FileCategory, FileInfo, Issue, IssueKind, Severity, SourceSpan,
};

use super::traits::PatternAnalyzer;
use crate::parsers::ParsedTree;

const ANALYZER_NAME: &str = "code-quality";

/// Nesting deeper than this many `if` levels is reported.
const MAX_NESTING_DEPTH: usize = 3;
/// Boolean expressions with more than this many operators are reported.
const MAX_BOOLEAN_OPERATORS: usize = 3;
/// Minimum contiguous code-like comment lines to count as a dead block.
const MIN_COMMENTED_LINES: usize = 3;
/// Arrow functions shorter than this keep their single-letter parameters.
const SHORT_ARROW_MAX_LEN: usize = 50;

const SUPPORTED: &[FileCategory] = &[
    FileCategory::Component,
    FileCategory::ApiRoute,
    FileCategory::Service,
    FileCategory::Util,
    FileCategory::Middleware,
    FileCategory::Other,
];

/// Patterns that mark a stripped comment line as probable code.
const CODE_PATTERNS: &[&str] = &[
    r"^(const|let|var|function|class|interface|type|import|export|return|if|else|for|while)\s",
    r"[{}\[\]();]",
    r"=>",
    r"[=<>!]==",
    r"\w+\s*\(",
    r"\w+\s*:",
    r"\.\w+",
];

const NESTED_CONDITIONAL_FIX: &str = "Refactor this nested conditional by:\n\
    1. Extracting nested logic into separate functions\n\
    2. Using early returns to reduce nesting\n\
    3. Combining conditions where appropriate\n\
    4. Consider using guard clauses or strategy pattern";

const COMPLEX_BOOLEAN_FIX: &str = "Simplify this boolean expression by:\n\
    1. Breaking it into smaller, named boolean variables\n\
    2. Extracting complex conditions into well-named functions\n\
    3. Using De Morgan's laws to simplify logic\n\
    4. Consider using a truth table to verify correctness";

const VARIABLE_NAME_FIX: &str = "Use descriptive variable names:\n\
    1. Choose a name that describes what the variable represents\n\
    2. Use camelCase for variable names\n\
    3. Make the name searchable and meaningful\n\
    4. Avoid abbreviations unless they are well-known";

const PARAMETER_NAME_FIX: &str = "Use descriptive parameter names:\n\
    1. Choose a name that describes the parameter's purpose\n\
    2. Use camelCase for parameter names\n\
    3. Make the name self-documenting\n\
    4. Consider the function's context when naming";

const COMMENTED_CODE_FIX: &str = "Remove commented-out code:\n\
    1. Delete the commented code - version control preserves history\n\
    2. If the code might be needed, create a feature branch\n\
    3. Add a TODO comment if you plan to restore it soon\n\
    4. Use feature flags instead of commenting code";

pub struct CodeQualityAnalyzer {
    code_like: RegexSet,
}

impl CodeQualityAnalyzer {
    /// Compiles the code-likeness patterns into a single set matched in one
    /// pass per comment line.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            code_like: RegexSet::new(CODE_PATTERNS)?,
        })
    }

    fn walk(&self, file: &FileInfo, tree: &ParsedTree, node: &Node, issues: &mut Vec<Issue>) {
        self.inspect(file, tree, node, issues);
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.walk(file, tree, &child, issues);
            }
        }
    }

    fn inspect(&self, file: &FileInfo, tree: &ParsedTree, node: &Node, issues: &mut Vec<Issue>) {
        if node.kind() == "if_statement" && !has_ancestor_kind(node, "if_statement") {
            self.check_nesting(file, tree, node, issues);
        } else if is_logical_operation(node) && !has_logical_ancestor(node) {
            self.check_boolean_complexity(file, tree, node, issues);
        } else if node.kind() == "variable_declarator" {
            self.check_variable_name(file, tree, node, issues);
        } else if node.kind() == "identifier" && is_parameter_identifier(node) {
            self.check_parameter_name(file, tree, node, issues);
        }
    }

    /// Depth is counted over the whole subtree of the outermost `if`, so a
    /// five-deep chain yields exactly one issue reporting five levels.
    fn check_nesting(
        &self,
        file: &FileInfo,
        tree: &ParsedTree,
        node: &Node,
        issues: &mut Vec<Issue>,
    ) {
        let depth = max_if_depth(node);
        if depth <= MAX_NESTING_DEPTH {
            return;
        }
        self.push_issue(
            issues,
            file,
            IssueKind::ConfusingLogic,
            Severity::Medium,
            EffortLevel::Small,
            tree.span_of(node),
            tree.snippet_of(node),
            format!(
                "Deeply nested conditional detected ({depth} levels deep). \
                 This makes the code hard to understand and maintain."
            ),
            NESTED_CONDITIONAL_FIX,
            &["confusing-logic", "nested-conditionals", "maintainability"],
        );
    }

    fn check_boolean_complexity(
        &self,
        file: &FileInfo,
        tree: &ParsedTree,
        node: &Node,
        issues: &mut Vec<Issue>,
    ) {
        let count = count_boolean_operators(node);
        if count <= MAX_BOOLEAN_OPERATORS {
            return;
        }
        self.push_issue(
            issues,
            file,
            IssueKind::ConfusingLogic,
            Severity::Medium,
            EffortLevel::Small,
            tree.span_of(node),
            tree.snippet_of(node),
            format!(
                "Complex boolean expression with {count} operators. \
                 This makes the logic difficult to understand and test."
            ),
            COMPLEX_BOOLEAN_FIX,
            &["confusing-logic", "complex-boolean", "readability"],
        );
    }

    fn check_variable_name(
        &self,
        file: &FileInfo,
        tree: &ParsedTree,
        node: &Node,
        issues: &mut Vec<Issue>,
    ) {
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        if name_node.kind() != "identifier" {
            return;
        }
        let name = tree.text_of(&name_node);
        if name.len() != 1 || is_loop_counter(name, node) {
            return;
        }
        self.push_issue(
            issues,
            file,
            IssueKind::PoorNaming,
            Severity::Low,
            EffortLevel::Trivial,
            tree.span_of(node),
            tree.snippet_of(node),
            format!(
                "Single-letter variable name '{name}' detected. \
                 Single-letter names make code harder to understand and search."
            ),
            VARIABLE_NAME_FIX,
            &["poor-naming", "single-letter", "readability"],
        );
    }

    fn check_parameter_name(
        &self,
        file: &FileInfo,
        tree: &ParsedTree,
        node: &Node,
        issues: &mut Vec<Issue>,
    ) {
        let name = tree.text_of(node);
        if name.len() != 1 {
            return;
        }
        // Single-letter parameters are idiomatic in short arrow callbacks
        // like `.map(x => x * 2)`.
        let in_short_arrow = enclosing_function(node)
            .map(|f| f.kind() == "arrow_function" && tree.text_of(&f).len() < SHORT_ARROW_MAX_LEN)
            .unwrap_or(false);
        if in_short_arrow {
            return;
        }
        self.push_issue(
            issues,
            file,
            IssueKind::PoorNaming,
            Severity::Low,
            EffortLevel::Trivial,
            tree.span_of(node),
            tree.snippet_of(node),
            format!(
                "Single-letter parameter name '{name}' detected. \
                 Use descriptive parameter names for clarity."
            ),
            PARAMETER_NAME_FIX,
            &["poor-naming", "single-letter", "parameters"],
        );
    }

    /// Line scan for blocks of commented-out code. A block is a contiguous
    /// run of comment lines whose stripped text looks like code; runs of
    /// `MIN_COMMENTED_LINES` or more are reported.
    fn scan_commented_code(&self, file: &FileInfo, source: &str, issues: &mut Vec<Issue>) {
        let mut block: Option<(usize, usize)> = None;

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            let is_comment =
                line.starts_with("//") || line.starts_with("/*") || line.starts_with('*');
            if is_comment && self.code_like.is_match(strip_comment_markers(line)) {
                match &mut block {
                    Some((_, count)) => *count += 1,
                    None => block = Some((idx, 1)),
                }
                continue;
            }
            if let Some((start, count)) = block.take() {
                self.flush_commented_block(file, start, count, issues);
            }
        }
        if let Some((start, count)) = block {
            self.flush_commented_block(file, start, count, issues);
        }
    }

    fn flush_commented_block(
        &self,
        file: &FileInfo,
        start: usize,
        count: usize,
        issues: &mut Vec<Issue>,
    ) {
        if count < MIN_COMMENTED_LINES {
            return;
        }
        let start_line = start + 1;
        let end_line = start + count;
        self.push_issue(
            issues,
            file,
            IssueKind::LegacyCode,
            Severity::Low,
            EffortLevel::Trivial,
            SourceSpan::lines(start_line, end_line),
            format!("Lines {start_line}-{end_line}"),
            format!(
                "Commented-out code block detected ({count} lines). \
                 Commented code should be removed and tracked in version control instead."
            ),
            COMMENTED_CODE_FIX,
            &["legacy-code", "commented-code", "cleanup"],
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn push_issue(
        &self,
        issues: &mut Vec<Issue>,
        file: &FileInfo,
        kind: IssueKind,
        severity: Severity,
        effort: EffortLevel,
        span: SourceSpan,
        snippet: String,
        description: String,
        recommendation: &str,
        tags: &[&str],
    ) {
        issues.push(Issue {
            id: issue_id(ANALYZER_NAME, &file.relative_path, kind, &span),
            kind,
            severity,
            category: "general".to_string(),
            file: file.relative_path.clone(),
            span,
            description,
            snippet,
            recommendation: recommendation.to_string(),
            effort,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            detected_by: ANALYZER_NAME.to_string(),
            detected_at_ms: now_ms(),
            related_issues: Vec::new(),
        });
    }
}

impl PatternAnalyzer for CodeQualityAnalyzer {
    fn name(&self) -> &str {
        ANALYZER_NAME
    }

    fn supported_categories(&self) -> &[FileCategory] {
        SUPPORTED
    }

    fn analyze(&self, file: &FileInfo, tree: &ParsedTree) -> Result<Vec<Issue>, AnalyzerError> {
        let mut issues = Vec::new();
        self.walk(file, tree, &tree.root(), &mut issues);
        self.scan_commented_code(file, tree.source(), &mut issues);
        Ok(issues)
    }
}

/// Deepest `if` chain within `node`, counting `node` itself when it is one.
fn max_if_depth(node: &Node) -> usize {
    let mut deepest = 0;
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            deepest = deepest.max(max_if_depth(&child));
        }
    }
    if node.kind() == "if_statement" {
        deepest + 1
    } else {
        deepest
    }
}

/// `&&` and `||` binary operations plus `!` negations in the subtree.
fn count_boolean_operators(node: &Node) -> usize {
    let mut count = 0;
    if is_logical_operation(node) {
        count += 1;
    }
    if node.kind() == "unary_expression"
        && node
            .child_by_field_name("operator")
            .map(|op| op.kind() == "!")
            .unwrap_or(false)
    {
        count += 1;
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            count += count_boolean_operators(&child);
        }
    }
    count
}

fn is_logical_operation(node: &Node) -> bool {
    node.kind() == "binary_expression"
        && node
            .child_by_field_name("operator")
            .map(|op| matches!(op.kind(), "&&" | "||"))
            .unwrap_or(false)
}

fn has_logical_ancestor(node: &Node) -> bool {
    let mut current = node.parent();
    while let Some(n) = current {
        if is_logical_operation(&n) {
            return true;
        }
        current = n.parent();
    }
    false
}

fn has_ancestor_kind(node: &Node, kind: &str) -> bool {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.kind() == kind {
            return true;
        }
        current = n.parent();
    }
    false
}

/// `i`, `j`, `k` inside a `for` loop are conventional and exempt.
fn is_loop_counter(name: &str, node: &Node) -> bool {
    matches!(name, "i" | "j" | "k")
        && (has_ancestor_kind(node, "for_statement") || has_ancestor_kind(node, "for_in_statement"))
}

/// True when the identifier sits in a parameter position of its parent.
///
/// Covers the JavaScript grammar (bare identifiers under
/// `formal_parameters`), the TypeScript grammar (`required_parameter` and
/// `optional_parameter` wrappers), and single-parameter arrows.
fn is_parameter_identifier(node: &Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        "formal_parameters" => true,
        "required_parameter" | "optional_parameter" => {
            parent.child_by_field_name("pattern").as_ref() == Some(node)
        }
        "arrow_function" => parent.child_by_field_name("parameter").as_ref() == Some(node),
        _ => false,
    }
}

fn enclosing_function<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut current = node.parent();
    while let Some(n) = current {
        if matches!(
            n.kind(),
            "arrow_function" | "function_declaration" | "function_expression" | "method_definition"
        ) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

/// Strips leading `//`, `/*`, `*` and a trailing `*/` from a trimmed
/// comment line.
fn strip_comment_markers(line: &str) -> &str {
    let mut s = line;
    for prefix in ["//", "/*", "*"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
        }
    }
    if let Some(rest) = s.strip_suffix("*/") {
        s = rest.trim_end();
    }
    s
}
