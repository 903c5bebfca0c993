//! Order-preserving duplicate removal.
//!
//! Equality is exact string equality: case and whitespace both count. Run the
//! normalizer first when `"a "` and `"a"` should collapse.

use fxhash::FxHashSet;

/// Keeps the first occurrence of every distinct line and drops the rest.
///
/// Runs in O(n) expected time with one hash-set probe per line.
///
/// ```rust
/// use lines::dedupe;
///
/// let input: Vec<String> = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(dedupe(input), vec!["b", "a", "c"]);
/// ```
pub fn dedupe(lines: Vec<String>) -> Vec<String> {
    let keep = first_occurrences(&lines);
    lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, first)| first.then_some(line))
        .collect()
}

/// Marks, for every line, whether it is the first time its content appears.
fn first_occurrences(lines: &[String]) -> Vec<bool> {
    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(lines.len(), Default::default());
    lines.iter().map(|line| seen.insert(line.as_str())).collect()
}
