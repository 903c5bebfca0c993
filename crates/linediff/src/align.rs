//! Sequence alignment shared by the line and word levels.
//!
//! Alignment uses Myers' O((N+M)·D) algorithm, where D is the size of the
//! minimal edit script, so the script never has more Added+Removed entries
//! than necessary. Worst case (no common elements) is O((N+M)²) time.
//!
//! Within each run of changes between two Unchanged entries, all Removed
//! entries are emitted before all Added entries.

use similar::{capture_diff_slices, Algorithm, DiffTag};

use crate::edit::DiffEdit;

/// Computes a minimal edit script turning `old` into `new`.
pub fn align(old: &[&str], new: &[&str]) -> Vec<DiffEdit> {
    if old.is_empty() {
        return new.iter().map(|s| DiffEdit::Added((*s).to_owned())).collect();
    }
    if new.is_empty() {
        return old.iter().map(|s| DiffEdit::Removed((*s).to_owned())).collect();
    }

    let mut edits = Vec::with_capacity(old.len().max(new.len()));
    let mut block = ChangeBlock::default();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                block.flush_into(&mut edits);
                edits.extend(
                    old[old_range]
                        .iter()
                        .map(|s| DiffEdit::Unchanged((*s).to_owned())),
                );
            }
            DiffTag::Delete => block.removed.extend_from_slice(&old[old_range]),
            DiffTag::Insert => block.added.extend_from_slice(&new[new_range]),
            DiffTag::Replace => {
                block.removed.extend_from_slice(&old[old_range]);
                block.added.extend_from_slice(&new[new_range]);
            }
        }
    }
    block.flush_into(&mut edits);
    edits
}

/// Changes buffered between two equal runs.
#[derive(Default)]
struct ChangeBlock<'a> {
    removed: Vec<&'a str>,
    added: Vec<&'a str>,
}

impl ChangeBlock<'_> {
    fn flush_into(&mut self, edits: &mut Vec<DiffEdit>) {
        edits.extend(self.removed.drain(..).map(|s| DiffEdit::Removed(s.to_owned())));
        edits.extend(self.added.drain(..).map(|s| DiffEdit::Added(s.to_owned())));
    }
}
