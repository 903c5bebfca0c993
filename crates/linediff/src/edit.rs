use serde::{Deserialize, Serialize};

/// One entry of an edit script.
///
/// At line level each entry carries one line without its `\n`. At word level
/// (see [`Replacement`](crate::Replacement)) it carries a run of tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DiffEdit {
    Unchanged(String),
    Removed(String),
    Added(String),
}

impl DiffEdit {
    pub fn text(&self) -> &str {
        match self {
            DiffEdit::Unchanged(text) | DiffEdit::Removed(text) | DiffEdit::Added(text) => text,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffEdit::Unchanged(_))
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DiffEdit::Removed(_))
    }

    pub fn is_added(&self) -> bool {
        matches!(self, DiffEdit::Added(_))
    }

    /// Single-character prefix used by unified diffs.
    pub const fn symbol(&self) -> &'static str {
        match self {
            DiffEdit::Unchanged(_) => " ",
            DiffEdit::Removed(_) => "-",
            DiffEdit::Added(_) => "+",
        }
    }
}

/// Entries of `edits` that exist on the old side (Unchanged and Removed).
pub fn old_side(edits: &[DiffEdit]) -> Vec<&str> {
    edits
        .iter()
        .filter(|edit| !edit.is_added())
        .map(DiffEdit::text)
        .collect()
}

/// Entries of `edits` that exist on the new side (Unchanged and Added).
pub fn new_side(edits: &[DiffEdit]) -> Vec<&str> {
    edits
        .iter()
        .filter(|edit| !edit.is_removed())
        .map(DiffEdit::text)
        .collect()
}

/// Counts per edit kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub is_identical: bool,
}

impl DiffSummary {
    pub fn from_edits(edits: &[DiffEdit]) -> Self {
        let mut summary = DiffSummary::default();
        for edit in edits {
            match edit {
                DiffEdit::Unchanged(_) => summary.unchanged += 1,
                DiffEdit::Removed(_) => summary.removed += 1,
                DiffEdit::Added(_) => summary.added += 1,
            }
        }
        summary.is_identical = summary.added == 0 && summary.removed == 0;
        summary
    }

    /// Added plus removed entries.
    pub fn changes(&self) -> usize {
        self.added + self.removed
    }
}
