//! Splitting raw text into a [`LineSequence`] and joining it back.
//!
//! Splitting happens on `\n` only. Every other byte, including a `\r` left
//! over from Windows line endings, stays part of its line, so
//! `join_lines(&split_lines(text)) == text` for any text.

/// Ordered list of lines, one entry per `\n`-delimited segment.
pub type LineSequence = Vec<String>;

/// Splits text on `\n` into owned lines.
///
/// Missing input and the empty string both produce an empty sequence.
/// Leading and trailing empty segments are kept as empty strings.
///
/// ```rust
/// use lines::split_lines;
///
/// assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a", ""]);
/// assert!(split_lines(None::<&str>).is_empty());
/// ```
pub fn split_lines<'a>(text: impl Into<Option<&'a str>>) -> LineSequence {
    match text.into() {
        None | Some("") => Vec::new(),
        Some(text) => text.split('\n').map(str::to_owned).collect(),
    }
}

/// Joins lines with `\n`, the inverse of [`split_lines`].
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines
        .iter()
        .map(|line| line.as_ref().len() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    let mut out = String::with_capacity(capacity);
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}
