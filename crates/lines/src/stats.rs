use serde::{Deserialize, Serialize};

use crate::filter::is_blank;

/// Before/after summary of a pipeline run.
///
/// Recomputed on every run from the original split and the final sequence;
/// nothing here is cached.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    pub original_line_count: usize,
    pub processed_line_count: usize,
    /// `original_line_count - processed_line_count`. No stage adds lines.
    pub removed_line_count: usize,
    pub empty_line_count_in_original: usize,
    /// Unicode scalar values in the output text, newlines included.
    pub character_count: usize,
    /// Whitespace-delimited words in the output text.
    pub word_count: usize,
}

impl Statistics {
    pub fn compute<S: AsRef<str>, T: AsRef<str>>(
        original: &[S],
        processed: &[T],
        output_text: &str,
    ) -> Self {
        let original_line_count = original.len();
        let processed_line_count = processed.len();
        Self {
            original_line_count,
            processed_line_count,
            removed_line_count: original_line_count.saturating_sub(processed_line_count),
            empty_line_count_in_original: original
                .iter()
                .filter(|line| is_blank(line.as_ref()))
                .count(),
            character_count: output_text.chars().count(),
            word_count: output_text.split_whitespace().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines_words_and_characters() {
        let original = ["  a b ", "", "c", "   "];
        let processed = ["a b", "c"];
        let stats = Statistics::compute(&original, &processed, "a b\nc");
        assert_eq!(
            stats,
            Statistics {
                original_line_count: 4,
                processed_line_count: 2,
                removed_line_count: 2,
                empty_line_count_in_original: 2,
                character_count: 5,
                word_count: 3,
            }
        );
    }

    #[test]
    fn character_count_is_per_scalar() {
        let stats = Statistics::compute(&["苹果"], &["苹果"], "苹果");
        assert_eq!(stats.character_count, 2);
        assert_eq!(stats.word_count, 1);
    }
}
