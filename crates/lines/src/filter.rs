/// True if the line has no content once surrounding whitespace is removed.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drops blank lines, keeping the relative order of the rest.
pub fn remove_empty(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !is_blank(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_lines_are_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(is_blank("\u{3000}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn remove_empty_preserves_order() {
        let input: Vec<String> = ["b", "", "  ", "a", "\t", "c"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(remove_empty(input), vec!["b", "a", "c"]);
    }

    #[test]
    fn remove_empty_keeps_padding_on_survivors() {
        let input = vec!["  a  ".to_string(), String::new()];
        assert_eq!(remove_empty(input), vec!["  a  "]);
    }
}
