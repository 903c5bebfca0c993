//! Word-level refinement of replaced lines.
//!
//! A replace pair is a single Removed line directly followed by a single
//! Added line, with no other change on either side of the pair. Larger
//! change blocks (two removed lines followed by three added, say) are left
//! as independent Removed/Added lines.

use serde::{Deserialize, Serialize};

use crate::align::align;
use crate::edit::DiffEdit;

/// Word-level diff of one replace pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    /// Index of the Removed entry in the line script. The Added entry
    /// follows at `edit_index + 1`.
    pub edit_index: usize,
    /// Word edits turning the removed line into the added one.
    pub words: Vec<DiffEdit>,
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
///
/// Concatenating the tokens gives back the line exactly.
///
/// ```rust
/// use linediff::tokenize_words;
///
/// assert_eq!(tokenize_words("a  bc\td"), vec!["a", "  ", "bc", "\t", "d"]);
/// ```
pub fn tokenize_words(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&line[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}

/// Diffs two lines word by word.
///
/// Adjacent tokens with the same edit kind are merged into one entry, so
/// `"the quick fox"` → `"the slow fox"` yields
/// `Unchanged("the ")`, `Removed("quick")`, `Added("slow")`, `Unchanged(" fox")`.
pub fn diff_words(removed: &str, added: &str) -> Vec<DiffEdit> {
    let old = tokenize_words(removed);
    let new = tokenize_words(added);
    coalesce(align(&old, &new))
}

/// Finds every replace pair in a line script and diffs it word by word.
pub fn refine(edits: &[DiffEdit]) -> Vec<Replacement> {
    let mut out = Vec::new();
    for (idx, pair) in edits.windows(2).enumerate() {
        let (DiffEdit::Removed(removed), DiffEdit::Added(added)) = (&pair[0], &pair[1]) else {
            continue;
        };
        let opens_block = idx == 0 || !edits[idx - 1].is_removed();
        let closes_block = edits.get(idx + 2).map_or(true, |next| !next.is_added());
        if opens_block && closes_block {
            out.push(Replacement {
                edit_index: idx,
                words: diff_words(removed, added),
            });
        }
    }
    out
}

/// Merges runs of same-kind edits.
fn coalesce(edits: Vec<DiffEdit>) -> Vec<DiffEdit> {
    let mut out: Vec<DiffEdit> = Vec::with_capacity(edits.len());
    for edit in edits {
        if let Some(last) = out.last_mut() {
            if append_same_kind(last, &edit) {
                continue;
            }
        }
        out.push(edit);
    }
    out
}

fn append_same_kind(last: &mut DiffEdit, edit: &DiffEdit) -> bool {
    match (last, edit) {
        (DiffEdit::Unchanged(acc), DiffEdit::Unchanged(text))
        | (DiffEdit::Removed(acc), DiffEdit::Removed(text))
        | (DiffEdit::Added(acc), DiffEdit::Added(text)) => {
            acc.push_str(text);
            true
        }
        _ => false,
    }
}
