//! Run orchestration: sequencing, failure policy, and instrumentation.

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use grime_core::config::EngineConfig;
use grime_core::errors::{AnalysisError, AnalyzerError, ParseError};
use grime_core::traits::{Cancellable, CancellationToken};
use grime_core::types::{now_ms, FileInfo, Issue};

use crate::aggregate::{aggregate, group_by_severity};
use crate::analyzers::PatternAnalyzer;
use crate::engine::metrics::{format_duration, FileMetrics, PerformanceSummary};
use crate::engine::progress::{ProgressCallback, ProgressEvent};
use crate::engine::types::AnalysisResult;
use crate::parsers::{ParsedTree, ParserManager};

/// Files slower than this are logged individually during the run.
const SLOW_FILE_THRESHOLD: Duration = Duration::from_millis(1_000);
/// Number of slowest files listed in the performance report.
const SLOWEST_REPORTED: usize = 5;

/// The orchestrator: drives the file-by-analyzer cross product.
///
/// Files are processed strictly one at a time, in input order, and within a
/// file analyzers run strictly one at a time, in the order supplied. The
/// engine owns the parser's shared context and evicts each file's tree as
/// soon as that file's iteration completes, so peak memory stays flat no
/// matter how large the corpus.
///
/// One instance can be reused across independent runs; `analyze` starts
/// from a clean slate and [`AnalysisEngine::reset`] restores the
/// freshly-constructed state explicitly.
pub struct AnalysisEngine {
    parser: ParserManager,
    config: EngineConfig,
    on_progress: Option<ProgressCallback>,
    cancellation: Option<CancellationToken>,
    error_count: usize,
    parse_errors: FxHashMap<PathBuf, String>,
    file_metrics: Vec<FileMetrics>,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        let parser = ParserManager::with_warning_logs(config.effective_log_warnings());
        Self {
            parser,
            config,
            on_progress: None,
            cancellation: None,
            error_count: 0,
            parse_errors: FxHashMap::default(),
            file_metrics: Vec::new(),
        }
    }

    /// Register a progress callback, invoked synchronously once per
    /// analyzed file. A panicking callback is isolated and logged; it never
    /// fails the run.
    pub fn set_on_progress(&mut self, callback: ProgressCallback) {
        self.on_progress = Some(callback);
    }

    /// Register a cancellation token. The engine checks it between files;
    /// a cancelled token aborts the run with [`AnalysisError::Cancelled`].
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// Run every applicable analyzer over every file, in input order.
    ///
    /// A file that fails to parse is recorded and skipped while
    /// `continue_on_error` holds and the error count stays below
    /// `max_errors`; otherwise the whole run aborts with no partial result.
    /// A failing analyzer only loses its own contribution for that one
    /// file.
    pub fn analyze(
        &mut self,
        files: &[FileInfo],
        analyzers: &[Box<dyn PatternAnalyzer>],
    ) -> Result<AnalysisResult, AnalysisError> {
        let run_start = Instant::now();
        let total_files = files.len();
        let mut all_issues: Vec<Issue> = Vec::new();
        let mut analyzed_files = 0usize;

        self.clear_run_state();

        if self.config.effective_log_performance() {
            info!(
                files = total_files,
                analyzers = analyzers.len(),
                "starting analysis"
            );
        }

        for (index, file) in files.iter().enumerate() {
            if self.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }

            let file_start = Instant::now();

            let parse_start = Instant::now();
            let tree = match self.parser.parse(file) {
                Ok(tree) => tree,
                Err(error) => {
                    self.record_parse_failure(file, error)?;
                    continue;
                }
            };
            let parse_time = parse_start.elapsed();

            let mut analysis_time = Duration::ZERO;
            let mut analyzers_run = 0usize;
            let mut file_issues: Vec<Issue> = Vec::new();

            for analyzer in analyzers {
                if !analyzer.supported_categories().contains(&file.category) {
                    continue;
                }
                let analyzer_start = Instant::now();
                match Self::run_analyzer(analyzer.as_ref(), file, &tree) {
                    Ok(mut found) => file_issues.append(&mut found),
                    Err(error) => {
                        if self.config.effective_log_warnings() {
                            warn!(
                                analyzer = error.analyzer(),
                                file = %file.relative_path,
                                error = %error,
                                "analyzer failed; continuing without its results"
                            );
                        }
                    }
                }
                analysis_time += analyzer_start.elapsed();
                analyzers_run += 1;
            }

            analyzed_files += 1;
            let issues_in_file = file_issues.len();
            all_issues.append(&mut file_issues);

            let total_time = file_start.elapsed();
            self.file_metrics.push(FileMetrics {
                file: file.relative_path.clone(),
                parse_time,
                analysis_time,
                total_time,
                issues_found: issues_in_file,
                analyzers_run,
            });

            if self.config.effective_log_performance() && total_time > SLOW_FILE_THRESHOLD {
                info!(
                    file = %file.relative_path,
                    time = %format_duration(total_time),
                    "slow file"
                );
            }

            self.report_progress(
                index,
                total_files,
                file,
                all_issues.len(),
                analyzed_files,
                run_start,
            );

            self.parser.evict(&file.path);
        }

        let duration = run_start.elapsed();

        if self.config.effective_log_performance() {
            self.log_performance_summary(duration, analyzed_files, all_issues.len());
        }

        let collection = aggregate(&all_issues);

        Ok(AnalysisResult {
            total_files,
            analyzed_files,
            total_issues: all_issues.len(),
            issues_by_kind: collection.by_kind,
            issues_by_category: collection.by_category,
            issues_by_severity: group_by_severity(&all_issues),
            timestamp_ms: now_ms(),
            duration,
        })
    }

    /// Number of files that failed to parse since the last reset or run
    /// start.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Copy of the parse-error record, keyed by absolute file path. Never
    /// the live map.
    pub fn parse_errors(&self) -> BTreeMap<PathBuf, String> {
        self.parse_errors
            .iter()
            .map(|(path, message)| (path.clone(), message.clone()))
            .collect()
    }

    /// Copy of the per-file timing records, in processing order.
    pub fn file_metrics(&self) -> Vec<FileMetrics> {
        self.file_metrics.clone()
    }

    /// Aggregates derived on demand from the current timing records.
    pub fn performance_summary(&self) -> PerformanceSummary {
        PerformanceSummary::from_file_metrics(&self.file_metrics)
    }

    /// The parser owning the shared parse context, for isolated parsing
    /// through [`ParserManager::parse_source`].
    pub fn parser_mut(&mut self) -> &mut ParserManager {
        &mut self.parser
    }

    /// Return the engine to a state indistinguishable from freshly
    /// constructed: clears the parser's tree arena, the error record, and
    /// all timing records.
    pub fn reset(&mut self) {
        self.parser.clear_all();
        self.clear_run_state();
    }

    fn clear_run_state(&mut self) {
        self.error_count = 0;
        self.parse_errors.clear();
        self.file_metrics.clear();
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(|token| token.is_cancelled())
            .unwrap_or(false)
    }

    /// Records the failure, then decides between skipping the file and
    /// aborting the run. `max_errors` wins over `continue_on_error`.
    fn record_parse_failure(
        &mut self,
        file: &FileInfo,
        error: ParseError,
    ) -> Result<(), AnalysisError> {
        self.error_count += 1;
        self.parse_errors
            .insert(file.path.clone(), error.to_string());

        if self.config.effective_log_warnings() {
            warn!(
                file = %file.relative_path,
                error = %error,
                "failed to parse file"
            );
        }

        if self.error_count >= self.config.effective_max_errors() {
            return Err(AnalysisError::TooManyErrors {
                error_count: self.error_count,
                file: file.relative_path.clone(),
                source: error,
            });
        }
        if !self.config.effective_continue_on_error() {
            return Err(AnalysisError::Halted {
                file: file.relative_path.clone(),
                source: error,
            });
        }
        Ok(())
    }

    /// One analyzer invocation as an isolated unit of failure: a panic is
    /// caught and surfaced as [`AnalyzerError::Panicked`].
    fn run_analyzer(
        analyzer: &dyn PatternAnalyzer,
        file: &FileInfo,
        tree: &ParsedTree,
    ) -> Result<Vec<Issue>, AnalyzerError> {
        match catch_unwind(AssertUnwindSafe(|| analyzer.analyze(file, tree))) {
            Ok(result) => result,
            Err(panic) => Err(AnalyzerError::Panicked {
                analyzer: analyzer.name().to_string(),
                message: panic_message(panic.as_ref()),
            }),
        }
    }

    fn report_progress(
        &mut self,
        index: usize,
        total_files: usize,
        file: &FileInfo,
        issues_so_far: usize,
        analyzed_so_far: usize,
        run_start: Instant,
    ) {
        let log_warnings = self.config.effective_log_warnings();
        let Some(callback) = self.on_progress.as_mut() else {
            return;
        };

        let elapsed = run_start.elapsed();
        let event = ProgressEvent {
            current_file: index + 1,
            total_files,
            file: file.relative_path.clone(),
            issues_found: issues_so_far,
            elapsed,
            average_time_per_file: elapsed / analyzed_so_far.max(1) as u32,
        };

        if catch_unwind(AssertUnwindSafe(|| callback(&event))).is_err() && log_warnings {
            warn!(file = %event.file, "progress callback panicked");
        }
    }

    fn log_performance_summary(
        &self,
        duration: Duration,
        analyzed_files: usize,
        total_issues: usize,
    ) {
        let summary = self.performance_summary();

        info!(
            duration = %format_duration(duration),
            files = analyzed_files,
            issues = total_issues,
            average = %format_duration(summary.average_time_per_file),
            parse = %format_duration(summary.total_parse_time),
            analysis = %format_duration(summary.total_analysis_time),
            "analysis complete"
        );

        if let Some(fastest) = &summary.fastest_file {
            info!(
                file = %fastest.file,
                time = %format_duration(fastest.total_time),
                "fastest file"
            );
        }
        if let Some(slowest) = &summary.slowest_file {
            info!(
                file = %slowest.file,
                time = %format_duration(slowest.total_time),
                parse = %format_duration(slowest.parse_time),
                analysis = %format_duration(slowest.analysis_time),
                issues = slowest.issues_found,
                analyzers = slowest.analyzers_run,
                "slowest file"
            );
        }

        if self.file_metrics.len() > SLOWEST_REPORTED {
            let mut ranked: Vec<&FileMetrics> = self.file_metrics.iter().collect();
            ranked.sort_by(|a, b| b.total_time.cmp(&a.total_time));
            for (rank, metric) in ranked.iter().take(SLOWEST_REPORTED).enumerate() {
                info!(
                    rank = rank + 1,
                    file = %metric.file,
                    time = %format_duration(metric.total_time),
                    "slowest files"
                );
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "analyzer panicked".to_string()
    }
}
