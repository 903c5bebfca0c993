//! linekit line pipeline.
//!
//! A stateless engine for line-oriented text clean-up: split text on `\n`,
//! drop blank lines, normalize whitespace, remove duplicates, sort, and
//! subtract one list of lines from another.
//!
//! ## What we do
//!
//! - Whitespace normalization per line (trim left/right/both, compress runs)
//! - Blank-line removal
//! - Stable, first-occurrence deduplication in O(n)
//! - Stable sorting: locale collation, numeric (all-or-nothing), by length
//! - Set subtraction A − B with dedup
//! - Before/after statistics for every pipeline run
//!
//! ## Pure function guarantee
//!
//! No I/O and no shared state. The same text and config give the same output
//! on every call. Missing input (`None`) is the empty sequence, never an
//! error.
//!
//! ## Stage order
//!
//! [`run`] always applies stages as split, remove empty, normalize, dedupe,
//! sort. Each stage is skipped when its flag is off.

mod config;
mod dedupe;
mod error;
mod filter;
mod pipeline;
mod sequence;
mod sort;
mod stats;
mod subtract;
mod whitespace;

pub use crate::config::PipelineConfig;
pub use crate::dedupe::dedupe;
pub use crate::error::LinesError;
pub use crate::filter::{is_blank, remove_empty};
pub use crate::pipeline::{apply_stages, run, PipelineOutput};
pub use crate::sequence::{join_lines, split_lines, LineSequence};
pub use crate::sort::{
    numeric_keys, sort_lines, SortConfig, SortDirection, SortKind, DEFAULT_SORT_LOCALE,
};
pub use crate::stats::Statistics;
pub use crate::subtract::{subtract, subtract_text};
pub use crate::whitespace::{compress_spaces, normalize, normalize_line, NormalizeOptions};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flag_order_does_not_change_stage_order() {
        let input = "  a  \n\n a\nb";
        let a: PipelineConfig = serde_json::from_str(
            r#"{"deduplicate":true,"trim_both":true,"remove_empty_lines":true}"#,
        )
        .expect("config");
        let b = PipelineConfig {
            remove_empty_lines: true,
            trim_both: true,
            deduplicate: true,
            ..Default::default()
        };
        assert_eq!(run(input, &a).output_text, "a\nb");
        assert_eq!(run(input, &b).output_text, "a\nb");
    }

    #[test]
    fn subtract_then_sort() {
        let remaining = subtract(
            &split_lines("pear\napple\nfig\napple"),
            &split_lines("fig"),
        );
        let sorted = sort_lines(remaining, &SortConfig::default());
        assert_eq!(sorted, vec!["apple", "pear"]);
    }

    fn line_vec() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[ab \t]{0,4}", 0..24)
    }

    proptest! {
        #[test]
        fn dedupe_is_idempotent(lines in line_vec()) {
            let once = dedupe(lines);
            prop_assert_eq!(dedupe(once.clone()), once);
        }

        #[test]
        fn dedupe_output_has_no_repeats(lines in line_vec()) {
            let out = dedupe(lines.clone());
            let mut sorted = out.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), out.len());
            for line in &lines {
                prop_assert!(out.contains(line));
            }
        }

        #[test]
        fn split_join_round_trips(text in "[a\n \t]{0,40}") {
            prop_assert_eq!(join_lines(&split_lines(text.as_str())), text);
        }

        #[test]
        fn subtract_with_empty_b_is_filtered_dedupe(lines in line_vec()) {
            let none: Vec<String> = Vec::new();
            prop_assert_eq!(subtract(&lines, &none), dedupe(remove_empty(lines.clone())));
        }

        #[test]
        fn removed_count_matches_line_delta(text in "[ab \n]{0,40}") {
            let cfg = PipelineConfig {
                remove_empty_lines: true,
                trim_both: true,
                deduplicate: true,
                ..Default::default()
            };
            let stats = run(text.as_str(), &cfg).stats;
            prop_assert_eq!(
                stats.removed_line_count,
                stats.original_line_count - stats.processed_line_count
            );
        }
    }
}
