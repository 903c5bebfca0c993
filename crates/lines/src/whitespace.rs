//! Line-level whitespace normalization.
//!
//! Every transform here maps one line to one line; a sequence never changes
//! length while passing through [`normalize`].
//!
//! # Whitespace Definition
//!
//! Whitespace is Unicode's `White_Space` property (what [`char::is_whitespace`]
//! reports), which covers ASCII space and tab as well as the ideographic
//! space (U+3000) common in CJK input and the no-break space (U+00A0).
//!
//! # Examples
//!
//! ```rust
//! use lines::{normalize, NormalizeOptions};
//!
//! let opts = NormalizeOptions {
//!     trim_both: true,
//!     compress_spaces: true,
//!     ..Default::default()
//! };
//! let out = normalize(vec!["  hello \t  world  ".to_string()], &opts);
//! assert_eq!(out, vec!["hello world"]);
//! ```

use serde::{Deserialize, Serialize};

/// Which whitespace transforms to apply to each line.
///
/// The flags are independent. `trim_both` may be combined with `trim_left`
/// or `trim_right`; the trims touch disjoint ends of the line, so the order
/// they run in does not matter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Strip leading whitespace.
    pub trim_left: bool,
    /// Strip trailing whitespace.
    pub trim_right: bool,
    /// Strip whitespace on both ends.
    pub trim_both: bool,
    /// Replace every whitespace run with a single ASCII space.
    pub compress_spaces: bool,
}

impl NormalizeOptions {
    /// True if at least one transform is enabled.
    pub fn any(&self) -> bool {
        self.trim_left || self.trim_right || self.trim_both || self.compress_spaces
    }

    fn strips_start(&self) -> bool {
        self.trim_left || self.trim_both
    }

    fn strips_end(&self) -> bool {
        self.trim_right || self.trim_both
    }
}

/// Applies the enabled transforms to every line.
///
/// Lines that a transform leaves untouched are moved through without
/// reallocating.
pub fn normalize(lines: Vec<String>, opts: &NormalizeOptions) -> Vec<String> {
    if !opts.any() {
        return lines;
    }
    lines
        .into_iter()
        .map(|line| normalize_line(line, opts))
        .collect()
}

/// Applies the enabled transforms to a single line.
pub fn normalize_line(line: String, opts: &NormalizeOptions) -> String {
    let trimmed = {
        let mut view = line.as_str();
        if opts.strips_start() {
            view = view.trim_start();
        }
        if opts.strips_end() {
            view = view.trim_end();
        }
        view
    };

    if opts.compress_spaces {
        return compress_spaces(trimmed);
    }
    if trimmed.len() == line.len() {
        line
    } else {
        trimmed.to_owned()
    }
}

/// Replaces every maximal run of whitespace with one ASCII space.
///
/// Unlike a full collapse, edges are not stripped: a leading or trailing run
/// also becomes a single space.
///
/// ```rust
/// use lines::compress_spaces;
///
/// assert_eq!(compress_spaces("a \t\u{3000} b"), "a b");
/// assert_eq!(compress_spaces("   a   "), " a ");
/// assert_eq!(compress_spaces(""), "");
/// ```
pub fn compress_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
