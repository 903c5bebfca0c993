//! linekit line diff.
//!
//! Compares two texts line by line and produces an edit script of
//! [`DiffEdit::Unchanged`], [`DiffEdit::Removed`] and [`DiffEdit::Added`]
//! entries. A Removed line directly followed by an Added line, with no other
//! change around them, can be refined into a word-level diff to highlight
//! what changed inside the line.
//!
//! ## Guarantees
//!
//! - Minimal: no script with fewer Added+Removed lines exists.
//! - Round-trip: Unchanged+Removed entries rebuild the old text's lines,
//!   Unchanged+Added entries rebuild the new text's lines.
//! - Deterministic and pure: inputs are never mutated.
//!
//! ## Cost
//!
//! Myers' algorithm runs in O((N+M)·D) time for N and M lines and an edit
//! script of size D, which degrades to quadratic for unrelated texts. Callers
//! facing unbounded input should use [`diff_lines_bounded`] or
//! [`DiffOptions::max_lines`].

mod align;
mod edit;
mod error;
mod report;
mod words;

use std::time::Instant;

use lines::split_lines;
use tracing::{debug, Level};

pub use crate::align::align;
pub use crate::edit::{new_side, old_side, DiffEdit, DiffSummary};
pub use crate::error::DiffError;
pub use crate::report::{DiffOptions, DiffReport};
pub use crate::words::{diff_words, refine, tokenize_words, Replacement};

/// Line-level diff of two texts.
///
/// Empty or missing old text yields an all-Added script, empty or missing
/// new text an all-Removed one, and identical texts an all-Unchanged one.
///
/// ```rust
/// use linediff::{diff_lines, DiffEdit};
///
/// let edits = diff_lines("a\nb\nc", "a\nc\nd");
/// assert_eq!(
///     edits,
///     vec![
///         DiffEdit::Unchanged("a".into()),
///         DiffEdit::Removed("b".into()),
///         DiffEdit::Unchanged("c".into()),
///         DiffEdit::Added("d".into()),
///     ]
/// );
/// ```
pub fn diff_lines<'a, 'b>(
    old: impl Into<Option<&'a str>>,
    new: impl Into<Option<&'b str>>,
) -> Vec<DiffEdit> {
    let old = split_lines(old);
    let new = split_lines(new);
    diff_split(&old, &new)
}

/// Like [`diff_lines`], but refuses inputs with more than `max_lines` lines
/// on either side.
pub fn diff_lines_bounded<'a, 'b>(
    old: impl Into<Option<&'a str>>,
    new: impl Into<Option<&'b str>>,
    max_lines: usize,
) -> Result<Vec<DiffEdit>, DiffError> {
    let opts = DiffOptions {
        max_lines: Some(max_lines),
        refine_words: false,
    };
    let old = split_lines(old);
    let new = split_lines(new);
    opts.check(old.len(), new.len())?;
    Ok(diff_split(&old, &new))
}

/// Line diff with word refinements and a summary.
pub fn diff_report<'a, 'b>(
    old: impl Into<Option<&'a str>>,
    new: impl Into<Option<&'b str>>,
    opts: &DiffOptions,
) -> Result<DiffReport, DiffError> {
    let old = split_lines(old);
    let new = split_lines(new);
    opts.check(old.len(), new.len())?;
    Ok(DiffReport::build(diff_split(&old, &new), opts))
}

fn diff_split(old: &[String], new: &[String]) -> Vec<DiffEdit> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "diff.diff_lines",
        old_lines = old.len(),
        new_lines = new.len()
    );
    let _guard = span.enter();

    let old: Vec<&str> = old.iter().map(String::as_str).collect();
    let new: Vec<&str> = new.iter().map(String::as_str).collect();
    let edits = align(&old, &new);

    debug!(
        edits = edits.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "diff_complete"
    );
    edits
}
