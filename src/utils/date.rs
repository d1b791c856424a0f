use chrono::{Datelike, Days, NaiveDate};

/// Year-first spellings, only tried when the leading part is a four-digit year.
const YEAR_FIRST_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Month-first spellings. Two-digit years are tried before four-digit ones so "4/15/24"
/// does not become year 24.
const MONTH_FIRST_FORMATS: [&str; 4] = ["%m/%d/%y", "%m/%d/%Y", "%m-%d-%y", "%m-%d-%Y"];

/// Month-label format, e.g. "Apr 2024".
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // chrono's %Y also takes 1-3 digits, so "1/5/24" would otherwise read as year 1
    let lead = s.split(['-', '/']).next().unwrap_or_default();
    let formats: &[&str] = if lead.len() == 4 && lead.chars().all(|c| c.is_ascii_digit()) {
        &YEAR_FIRST_FORMATS
    } else {
        &MONTH_FIRST_FORMATS
    };

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// The earliest effective date a rate can carry. Every person's first rate starts here.
pub fn default_origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Calendar month + year of a date, independent of the day.
pub fn month_label(d: NaiveDate) -> String {
    d.format(MONTH_LABEL_FORMAT).to_string()
}

/// Parse a month label back to the first day of that month.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {}", label.trim()), "%d %b %Y").ok()
}

pub fn month_start(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn month_end(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };

    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(d)
}

pub fn plus_days(d: NaiveDate, days: u32) -> NaiveDate {
    d.checked_add_days(Days::new(days as u64)).unwrap_or(d)
}

/// MM/DD/YYYY, as printed on invoices.
pub fn us_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}
