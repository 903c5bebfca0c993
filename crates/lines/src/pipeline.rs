use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

use crate::config::PipelineConfig;
use crate::dedupe::dedupe;
use crate::filter::remove_empty;
use crate::sequence::{join_lines, split_lines};
use crate::sort::sort_lines;
use crate::stats::Statistics;
use crate::whitespace::normalize;

/// Output text and statistics of one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineOutput {
    pub output_text: String,
    pub stats: Statistics,
}

/// Main entry point. Runs the enabled stages over `raw` in fixed order.
///
/// 1. split on `\n`
/// 2. drop blank lines (`remove_empty_lines`)
/// 3. whitespace transforms (`trim_*`, `compress_spaces`)
/// 4. dedupe (`deduplicate`)
/// 5. sort (`sort`)
///
/// Disabled stages are skipped entirely. Text that is empty or whitespace-only
/// short-circuits to an empty output with zeroed statistics.
///
/// ```rust
/// use lines::{run, PipelineConfig};
///
/// let cfg = PipelineConfig {
///     remove_empty_lines: true,
///     trim_both: true,
///     deduplicate: true,
///     ..Default::default()
/// };
/// let out = run("  a  \n\n a\nb", &cfg);
/// assert_eq!(out.output_text, "a\nb");
/// assert_eq!(out.stats.removed_line_count, 2);
/// ```
pub fn run<'a>(raw: impl Into<Option<&'a str>>, cfg: &PipelineConfig) -> PipelineOutput {
    let raw = raw.into().unwrap_or_default();
    if raw.trim().is_empty() {
        return PipelineOutput::default();
    }

    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "lines.run", input_bytes = raw.len());
    let _guard = span.enter();

    let original = split_lines(raw);
    let processed = apply_stages(original.clone(), cfg);
    let output_text = join_lines(&processed);
    let stats = Statistics::compute(&original, &processed, &output_text);

    debug!(
        original_lines = stats.original_line_count,
        processed_lines = stats.processed_line_count,
        elapsed_micros = start.elapsed().as_micros(),
        "pipeline_complete"
    );

    PipelineOutput { output_text, stats }
}

/// Applies the enabled stages to an already split sequence.
pub fn apply_stages(mut lines: Vec<String>, cfg: &PipelineConfig) -> Vec<String> {
    if cfg.remove_empty_lines {
        lines = remove_empty(lines);
    }
    let normalize_opts = cfg.normalize_options();
    if normalize_opts.any() {
        lines = normalize(lines, &normalize_opts);
    }
    if cfg.deduplicate {
        lines = dedupe(lines);
    }
    if cfg.sort {
        lines = sort_lines(lines, &cfg.sort_config);
    }
    lines
}
