//! Stable line sorting.
//!
//! Three comparators are available, selected by [`SortKind`]:
//!
//! - `Alphabetical` compares with the Unicode Collation Algorithm tailored to
//!   [`SortConfig::locale`] (Chinese by default, so Han text orders by pinyin
//!   rather than by code point).
//! - `Numerical` compares lines as floats, but only when every line is either
//!   blank or a finite number. A single non-numeric line switches the whole
//!   sequence to alphabetical order.
//! - `Length` compares by the number of Unicode scalar values.
//!
//! Every mode uses a stable sort, and `Desc` reverses the comparator rather
//! than the output, so equal lines keep their input order in both directions.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LinesError;

/// Default collation locale.
pub const DEFAULT_SORT_LOCALE: &str = "zh";

/// Comparator used by [`sort_lines`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    #[default]
    Alphabetical,
    Numerical,
    Length,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// How [`sort_lines`] orders a sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SortConfig {
    #[serde(rename = "type")]
    pub kind: SortKind,
    pub direction: SortDirection,
    /// BCP 47 locale used for alphabetical collation. Empty means the root
    /// collation.
    pub locale: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            kind: SortKind::Alphabetical,
            direction: SortDirection::Asc,
            locale: DEFAULT_SORT_LOCALE.to_string(),
        }
    }
}

impl SortConfig {
    pub fn new(kind: SortKind, direction: SortDirection) -> Self {
        Self {
            kind,
            direction,
            ..Default::default()
        }
    }

    /// Checks that the collation locale parses.
    pub fn validate(&self) -> Result<(), LinesError> {
        parse_locale(&self.locale).map(|_| ())
    }
}

/// Sorts lines according to `cfg`. Ties keep their original relative order.
///
/// ```rust
/// use lines::{sort_lines, SortConfig, SortDirection, SortKind};
///
/// let input: Vec<String> = ["10", "2", "1"].iter().map(|s| s.to_string()).collect();
/// let cfg = SortConfig::new(SortKind::Numerical, SortDirection::Asc);
/// assert_eq!(sort_lines(input, &cfg), vec!["1", "2", "10"]);
/// ```
pub fn sort_lines(mut lines: Vec<String>, cfg: &SortConfig) -> Vec<String> {
    if lines.len() < 2 {
        return lines;
    }
    match cfg.kind {
        SortKind::Alphabetical => sort_alphabetical(&mut lines, cfg),
        SortKind::Numerical => match numeric_keys(&lines) {
            Some(keys) => return sort_numerical(lines, keys, cfg.direction),
            None => {
                debug!(
                    lines = lines.len(),
                    "numerical sort fell back to alphabetical"
                );
                sort_alphabetical(&mut lines, cfg);
            }
        },
        SortKind::Length => lines.sort_by(|a, b| {
            directed(a.chars().count().cmp(&b.chars().count()), cfg.direction)
        }),
    }
    lines
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn sort_alphabetical(lines: &mut [String], cfg: &SortConfig) {
    match collator_for(&cfg.locale) {
        Some(collator) => {
            lines.sort_by(|a, b| directed(collator.compare(a, b), cfg.direction));
        }
        None => {
            lines.sort_by(|a, b| directed(a.cmp(b), cfg.direction));
        }
    }
}

fn sort_numerical(lines: Vec<String>, keys: Vec<f64>, direction: SortDirection) -> Vec<String> {
    let mut keyed: Vec<(f64, String)> = keys.into_iter().zip(lines).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        directed(a.partial_cmp(b).unwrap_or(Ordering::Equal), direction)
    });
    keyed.into_iter().map(|(_, line)| line).collect()
}

/// Parses every line as a finite float, blank lines counting as zero.
///
/// Returns `None` as soon as one line is neither blank nor numeric.
pub fn numeric_keys(lines: &[String]) -> Option<Vec<f64>> {
    lines.iter().map(|line| parse_numeric(line)).collect()
}

fn parse_numeric(line: &str) -> Option<f64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_locale(locale: &str) -> Result<Locale, LinesError> {
    if locale.trim().is_empty() {
        return Ok(Locale::UND);
    }
    locale
        .parse::<Locale>()
        .map_err(|err| LinesError::InvalidConfig(format!("sort locale {locale:?}: {err}")))
}

/// Builds a collator for `locale`, falling back to the root collation for an
/// unparseable locale and to code-point order if no collation data loads.
fn collator_for(locale: &str) -> Option<Collator> {
    let parsed = parse_locale(locale).unwrap_or_else(|err| {
        warn!(error = %err, "using root collation");
        Locale::UND
    });
    match Collator::try_new(&parsed.into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(locale, error = ?err, "collator unavailable, using code-point order");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numerical_ascending() {
        let cfg = SortConfig::new(SortKind::Numerical, SortDirection::Asc);
        assert_eq!(sort_lines(lines(&["10", "2", "1"]), &cfg), vec!["1", "2", "10"]);
    }

    #[test]
    fn numerical_descending_with_decimals_and_negatives() {
        let cfg = SortConfig::new(SortKind::Numerical, SortDirection::Desc);
        assert_eq!(
            sort_lines(lines(&["-1.5", " 3 ", "0.25", "1e2"]), &cfg),
            vec!["1e2", " 3 ", "0.25", "-1.5"]
        );
    }

    #[test]
    fn numerical_treats_blank_as_zero() {
        let cfg = SortConfig::new(SortKind::Numerical, SortDirection::Asc);
        assert_eq!(
            sort_lines(lines(&["5", "", "-2"]), &cfg),
            vec!["-2", "", "5"]
        );
    }

    #[test]
    fn numerical_falls_back_to_alphabetical_for_whole_sequence() {
        let numeric = SortConfig::new(SortKind::Numerical, SortDirection::Asc);
        let alpha = SortConfig::new(SortKind::Alphabetical, SortDirection::Asc);
        let input = lines(&["10", "abc", "2"]);
        let fallback = sort_lines(input.clone(), &numeric);
        assert_eq!(fallback, sort_lines(input, &alpha));
        // Collation compares digit strings character by character.
        assert_eq!(fallback, vec!["10", "2", "abc"]);
    }

    #[test]
    fn non_finite_values_are_not_numeric() {
        assert!(numeric_keys(&lines(&["1", "inf"])).is_none());
        assert!(numeric_keys(&lines(&["NaN"])).is_none());
        assert_eq!(numeric_keys(&lines(&["1", " ", "2.5"])), Some(vec![1.0, 0.0, 2.5]));
    }

    #[test]
    fn alphabetical_is_case_insensitive_at_primary_level() {
        let cfg = SortConfig::new(SortKind::Alphabetical, SortDirection::Asc);
        assert_eq!(
            sort_lines(lines(&["banana", "Apple", "cherry"]), &cfg),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn alphabetical_orders_han_by_pinyin() {
        let cfg = SortConfig::new(SortKind::Alphabetical, SortDirection::Asc);
        // xiāng, píng, chéng
        assert_eq!(
            sort_lines(lines(&["香蕉", "苹果", "橙子"]), &cfg),
            vec!["橙子", "苹果", "香蕉"]
        );
    }

    #[test]
    fn alphabetical_descending() {
        let cfg = SortConfig::new(SortKind::Alphabetical, SortDirection::Desc);
        assert_eq!(
            sort_lines(lines(&["b", "c", "a"]), &cfg),
            vec!["c", "b", "a"]
        );
    }

    #[test]
    fn length_sort_counts_scalars_not_bytes() {
        let cfg = SortConfig::new(SortKind::Length, SortDirection::Asc);
        assert_eq!(
            sort_lines(lines(&["abcd", "苹果", "xyz"]), &cfg),
            vec!["苹果", "xyz", "abcd"]
        );
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let asc = SortConfig::new(SortKind::Length, SortDirection::Asc);
        let desc = SortConfig::new(SortKind::Length, SortDirection::Desc);
        let input = lines(&["bb", "x", "aa", "y", "ccc"]);
        assert_eq!(
            sort_lines(input.clone(), &asc),
            vec!["x", "y", "bb", "aa", "ccc"]
        );
        assert_eq!(sort_lines(input, &desc), vec!["ccc", "bb", "aa", "x", "y"]);
    }

    #[test]
    fn numeric_ties_are_stable() {
        let cfg = SortConfig::new(SortKind::Numerical, SortDirection::Asc);
        assert_eq!(
            sort_lines(lines(&["1.0", "0", "1", "01"]), &cfg),
            vec!["0", "1.0", "1", "01"]
        );
    }

    #[test]
    fn unparseable_locale_is_rejected_by_validate() {
        let cfg = SortConfig {
            locale: "not a locale!".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(LinesError::InvalidConfig(_))));
        assert!(SortConfig::default().validate().is_ok());
    }

    #[test]
    fn unparseable_locale_still_sorts() {
        let cfg = SortConfig {
            locale: "not a locale!".into(),
            ..Default::default()
        };
        assert_eq!(sort_lines(lines(&["b", "a"]), &cfg), vec!["a", "b"]);
    }

    #[test]
    fn sort_config_serializes_kind_as_type() {
        let cfg = SortConfig::new(SortKind::Length, SortDirection::Desc);
        let json = serde_json::to_value(&cfg).expect("serialize");
        assert_eq!(json["type"], "length");
        assert_eq!(json["direction"], "desc");

        let parsed: SortConfig =
            serde_json::from_str(r#"{"type":"numerical"}"#).expect("deserialize");
        assert_eq!(parsed.kind, SortKind::Numerical);
        assert_eq!(parsed.direction, SortDirection::Asc);
        assert_eq!(parsed.locale, DEFAULT_SORT_LOCALE);
    }
}
