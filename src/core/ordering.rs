//! Ordering of the aggregation tree's keys.
//!
//! Every level keeps its unordered map; ordering only produces the key sequence that is
//! attached next to it. Keys are pre-sorted lexicographically before the stable sort, so
//! keys that compare equal come out in the same order on every run.

use crate::utils::date::parse_month_label;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Width of the numeric prefix on sub-project abbreviations ("002-Beta").
pub const SUB_PREFIX_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// "Mon YYYY", chronological.
    MonthYear,
    /// One letter + numeric suffix ("R-22"), by letter ordinal + suffix / 100.
    /// Suffixes of 100 or more overlap the next letter.
    MainProjectCode,
    /// Fixed-width numeric prefix ("010-Alpha").
    SubProjectCode,
}

/// Numeric comparison value of a key, `None` when the key does not follow its format.
pub fn compare_value(key: &str, kind: KeyKind) -> Option<f64> {
    match kind {
        KeyKind::MonthYear => {
            parse_month_label(key).map(|d| chrono::Datelike::num_days_from_ce(&d) as f64)
        }
        KeyKind::MainProjectCode => {
            let first = key.chars().next()?;
            let letter = first.to_lowercase().next()? as u32 as f64;
            let suffix = match key.find('-') {
                Some(i) => &key[i + 1..],
                None => &key[first.len_utf8()..],
            };
            let suffix = suffix.trim();
            let n = if suffix.is_empty() {
                0.0
            } else {
                suffix.parse::<f64>().ok()?
            };
            Some(letter + n / 100.0)
        }
        KeyKind::SubProjectCode => {
            let prefix: String = key.chars().take(SUB_PREFIX_WIDTH).collect();
            prefix.trim().parse::<u32>().ok().map(f64::from)
        }
    }
}

/// Keys that do not parse sort after every key that does.
fn compare(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_keys(keys: &mut [String], kind: KeyKind) {
    keys.sort();
    keys.sort_by(|a, b| compare(compare_value(a, kind), compare_value(b, kind)));
}

/// Ordered key sequence of one tree level. The map itself is left untouched.
pub fn order_keys<V>(level: &HashMap<String, V>, kind: KeyKind) -> Vec<String> {
    let mut keys: Vec<String> = level.keys().cloned().collect();
    sort_keys(&mut keys, kind);
    keys
}

/// Stable ordering of people by display rank; equal ranks keep arrival order.
pub fn order_by_rank<T>(items: &mut [T], rank: impl Fn(&T) -> i64) {
    items.sort_by_key(|t| rank(t));
}
