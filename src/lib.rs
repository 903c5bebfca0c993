//! Workspace umbrella crate for linekit.
//!
//! This crate stitches together the line pipeline (`lines`) and the line diff
//! engine (`linediff`) so callers get one function-level API:
//!
//! - [`run_pipeline`]: remove empty lines, normalize whitespace, dedupe, sort
//! - [`subtract_lines`]: lines of A that are not in B
//! - [`diff_lines`] / [`diff_report`]: line edit script with word refinement
//!
//! Every call is synchronous, pure and independent of the others. Callers
//! persist [`PipelineConfig`] themselves; [`LinekitConfig`] gives it a YAML
//! form.

pub mod config;

pub use lines::{
    LineSequence, LinesError, NormalizeOptions, PipelineConfig, PipelineOutput, SortConfig,
    SortDirection, SortKind, Statistics, compress_spaces, dedupe, join_lines, normalize,
    remove_empty, sort_lines, split_lines, subtract,
};
pub use linediff::{
    DiffEdit, DiffError, DiffOptions, DiffReport, DiffSummary, Replacement, diff_words,
    new_side, old_side, refine, tokenize_words,
};

pub use crate::config::{ConfigLoadError, LinekitConfig};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{Level, info, warn};

/// Errors surfaced by the umbrella API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinekitError {
    #[error("line pipeline failure: {0}")]
    Lines(#[from] LinesError),
    #[error("diff failure: {0}")]
    Diff(#[from] DiffError),
}

/// Metrics observer for the top-level operations.
pub trait TextMetrics: Send + Sync {
    fn record_pipeline(&self, latency: Duration, stats: &Statistics);
    fn record_subtract(&self, latency: Duration, kept_lines: usize);
    fn record_diff(&self, latency: Duration, result: Result<&DiffSummary, &DiffError>);
}

/// Install or clear the global metrics recorder.
pub fn set_text_metrics(recorder: Option<Arc<dyn TextMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn TextMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn TextMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn TextMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn TextMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_pipeline(self, stats: &Statistics) {
        self.recorder.record_pipeline(self.start.elapsed(), stats);
    }

    fn record_subtract(self, kept_lines: usize) {
        self.recorder.record_subtract(self.start.elapsed(), kept_lines);
    }

    fn record_diff(self, result: Result<&DiffSummary, &DiffError>) {
        self.recorder.record_diff(self.start.elapsed(), result);
    }
}

/// Runs the line pipeline over `raw` with the stages `cfg` enables.
///
/// Missing input is treated as empty text. See [`lines::run`] for the fixed
/// stage order.
pub fn run_pipeline<'a>(raw: impl Into<Option<&'a str>>, cfg: &PipelineConfig) -> PipelineOutput {
    let raw = raw.into();
    let span = tracing::span!(
        Level::INFO,
        "lines.run_pipeline",
        input_bytes = raw.map_or(0, str::len)
    );
    let _guard = span.enter();
    let metrics = MetricsSpan::start();

    let out = lines::run(raw, cfg);

    info!(
        original_lines = out.stats.original_line_count,
        processed_lines = out.stats.processed_line_count,
        removed_lines = out.stats.removed_line_count,
        "pipeline_success"
    );
    if let Some(span) = metrics {
        span.record_pipeline(&out.stats);
    }
    out
}

/// Lines of `a` not present in `b`, deduplicated, blank lines ignored,
/// joined with `\n`.
pub fn subtract_lines<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
) -> String {
    let a = split_lines(a);
    let b = split_lines(b);
    let span = tracing::span!(
        Level::INFO,
        "lines.subtract",
        a_lines = a.len(),
        b_lines = b.len()
    );
    let _guard = span.enter();
    let metrics = MetricsSpan::start();

    let kept = subtract(&a, &b);

    info!(kept_lines = kept.len(), "subtract_success");
    if let Some(span) = metrics {
        span.record_subtract(kept.len());
    }
    join_lines(&kept)
}

/// Line-level edit script from `old` to `new`.
///
/// Runs in O((N+M)·D) time; use [`diff_report`] with
/// [`DiffOptions::max_lines`] to bound untrusted input.
pub fn diff_lines<'a, 'b>(
    old: impl Into<Option<&'a str>>,
    new: impl Into<Option<&'b str>>,
) -> Vec<DiffEdit> {
    let metrics = MetricsSpan::start();
    let edits = linediff::diff_lines(old, new);
    let summary = DiffSummary::from_edits(&edits);
    info!(
        added = summary.added,
        removed = summary.removed,
        unchanged = summary.unchanged,
        "diff_success"
    );
    if let Some(span) = metrics {
        span.record_diff(Ok(&summary));
    }
    edits
}

/// Line diff with word refinements and counts, honouring `opts`.
pub fn diff_report<'a, 'b>(
    old: impl Into<Option<&'a str>>,
    new: impl Into<Option<&'b str>>,
    opts: &DiffOptions,
) -> Result<DiffReport, LinekitError> {
    let metrics = MetricsSpan::start();
    match linediff::diff_report(old, new, opts) {
        Ok(report) => {
            info!(
                added = report.summary.added,
                removed = report.summary.removed,
                replacements = report.replacements.len(),
                "diff_success"
            );
            if let Some(span) = metrics {
                span.record_diff(Ok(&report.summary));
            }
            Ok(report)
        }
        Err(err) => {
            warn!(error = %err, "diff_failure");
            if let Some(span) = metrics {
                span.record_diff(Err(&err));
            }
            Err(LinekitError::Diff(err))
        }
    }
}

/// Runs the pipeline configured in `cfg`, validating it first.
pub fn run_configured<'a>(
    raw: impl Into<Option<&'a str>>,
    cfg: &LinekitConfig,
) -> Result<PipelineOutput, LinekitError> {
    cfg.pipeline.validate()?;
    Ok(run_pipeline(raw, &cfg.pipeline))
}
