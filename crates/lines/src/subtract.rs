//! Relative complement of two line sequences (A − B).

use fxhash::FxHashSet;

use crate::filter::is_blank;
use crate::sequence::{join_lines, split_lines};

/// Lines of `a` that do not appear anywhere in `b`, deduplicated.
///
/// Membership is set-based: one matching line in `b` excludes every copy of
/// it in `a`. Blank lines never take part on either side. The result keeps
/// the order in which lines first appear in `a`.
///
/// Runs in O(|a| + |b|) expected time.
///
/// ```rust
/// use lines::subtract;
///
/// let a: Vec<String> = ["1", "2", "2", "3"].iter().map(|s| s.to_string()).collect();
/// let b = vec!["2".to_string()];
/// assert_eq!(subtract(&a, &b), vec!["1", "3"]);
/// ```
pub fn subtract<A, B>(a: &[A], b: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let excluded: FxHashSet<&str> = b
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !is_blank(line))
        .collect();

    let mut emitted: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();
    for line in a {
        let line: &str = line.as_ref();
        if is_blank(line) || excluded.contains(line) {
            continue;
        }
        if emitted.insert(line) {
            out.push(line.to_owned());
        }
    }
    out
}

/// Text-level wrapper: splits both inputs, subtracts, and rejoins with `\n`.
pub fn subtract_text<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
) -> String {
    let a = split_lines(a);
    let b = split_lines(b);
    join_lines(&subtract(&a, &b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::dedupe;
    use crate::filter::remove_empty;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn set_semantics_not_multiset() {
        assert_eq!(
            subtract(&lines(&["1", "2", "2", "3"]), &lines(&["2"])),
            vec!["1", "3"]
        );
    }

    #[test]
    fn empty_b_is_dedupe_of_filtered_a() {
        let a = lines(&["x", "", "y", "x", "  ", "z"]);
        let none: Vec<String> = Vec::new();
        assert_eq!(subtract(&a, &none), dedupe(remove_empty(a.clone())));
    }

    #[test]
    fn blank_lines_in_b_exclude_nothing() {
        let a = lines(&["a", "b"]);
        assert_eq!(subtract(&a, &lines(&["", "   "])), vec!["a", "b"]);
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(
            subtract(&lines(&["a", "a ", "A"]), &lines(&["a"])),
            vec!["a ", "A"]
        );
    }

    #[test]
    fn keeps_first_seen_order_of_a() {
        assert_eq!(
            subtract(&lines(&["c", "a", "b", "a", "c"]), &lines(&["b"])),
            vec!["c", "a"]
        );
    }

    #[test]
    fn text_wrapper_round_trips() {
        assert_eq!(subtract_text("苹果\n香蕉\n\n橙子\n苹果", "香蕉"), "苹果\n橙子");
        assert_eq!(subtract_text(None::<&str>, "x"), "");
        assert_eq!(subtract_text("a\nb", None::<&str>), "a\nb");
    }
}
