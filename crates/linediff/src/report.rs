use serde::{Deserialize, Serialize};

use crate::edit::{DiffEdit, DiffSummary};
use crate::error::DiffError;
use crate::words::{refine, Replacement};

/// Options for [`diff_report`](crate::diff_report).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiffOptions {
    /// Reject inputs with more lines than this on either side.
    pub max_lines: Option<usize>,
    /// Compute word-level diffs for replace pairs.
    pub refine_words: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_lines: None,
            refine_words: true,
        }
    }
}

impl DiffOptions {
    pub(crate) fn check(&self, old_lines: usize, new_lines: usize) -> Result<(), DiffError> {
        match self.max_lines {
            Some(limit) if old_lines.max(new_lines) > limit => Err(DiffError::InputTooLarge {
                lines: old_lines.max(new_lines),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Line script plus word refinements and counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffReport {
    pub edits: Vec<DiffEdit>,
    pub replacements: Vec<Replacement>,
    pub summary: DiffSummary,
}

impl DiffReport {
    pub(crate) fn build(edits: Vec<DiffEdit>, opts: &DiffOptions) -> Self {
        let replacements = if opts.refine_words {
            refine(&edits)
        } else {
            Vec::new()
        };
        let summary = DiffSummary::from_edits(&edits);
        Self {
            edits,
            replacements,
            summary,
        }
    }

    /// Word refinement for the Removed entry at `edit_index`, if any.
    pub fn replacement_at(&self, edit_index: usize) -> Option<&Replacement> {
        self.replacements
            .binary_search_by_key(&edit_index, |r| r.edit_index)
            .ok()
            .map(|pos| &self.replacements[pos])
    }

    /// Renders the script with `-`/`+`/space prefixes, one line per entry.
    pub fn to_unified_lines(&self) -> String {
        let mut out = String::new();
        for edit in &self.edits {
            out.push_str(edit.symbol());
            out.push_str(edit.text());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_applies_to_larger_side() {
        let opts = DiffOptions {
            max_lines: Some(3),
            ..Default::default()
        };
        assert!(opts.check(3, 2).is_ok());
        assert_eq!(
            opts.check(1, 4),
            Err(DiffError::InputTooLarge { lines: 4, limit: 3 })
        );
        assert!(DiffOptions::default().check(usize::MAX, 0).is_ok());
    }

    #[test]
    fn refinement_can_be_disabled() {
        let edits = vec![DiffEdit::Removed("a b".into()), DiffEdit::Added("a c".into())];
        let opts = DiffOptions {
            refine_words: false,
            ..Default::default()
        };
        let report = DiffReport::build(edits.clone(), &opts);
        assert!(report.replacements.is_empty());

        let report = DiffReport::build(edits, &DiffOptions::default());
        assert!(report.replacement_at(0).is_some());
        assert!(report.replacement_at(1).is_none());
    }

    #[test]
    fn unified_rendering() {
        let edits = vec![
            DiffEdit::Unchanged("a".into()),
            DiffEdit::Removed("b".into()),
            DiffEdit::Added("c".into()),
        ];
        let report = DiffReport::build(edits, &DiffOptions::default());
        assert_eq!(report.to_unified_lines(), " a\n-b\n+c\n");
    }
}
