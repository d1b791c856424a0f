use crate::models::RateChange;
use chrono::NaiveDate;

/// Rate in force on `target`.
///
/// The first history entry is the default; any later entry replaces the candidate when its
/// effective date is strictly after the candidate's and not after `target`. The history is not
/// assumed sorted, and equal effective dates keep whichever was met first.
pub fn resolve_rate(history: &[RateChange], target: NaiveDate) -> Option<f64> {
    let (first, rest) = history.split_first()?;
    if rest.is_empty() {
        return Some(first.rate);
    }

    let mut candidate = first;
    for change in rest {
        if change.effective > candidate.effective && change.effective <= target {
            candidate = change;
        }
    }

    Some(candidate.rate)
}
