//! Text → typed conversion at the input boundary.
//!
//! Each parser fails fast with the file, line and field that could not be read, so the
//! resolvers and the builder only ever see typed values.
//! Line numbers count the CSV header as line 1.

use super::rows::{JobcodeRow, LedgerRow, RosterRow};
use crate::errors::{AppError, AppResult};
use crate::models::{EmploymentType, JobcodeMapping};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::HashSet;

pub const PERSONNEL: &str = "personnel";
pub const JOBCODES: &str = "jobcodes";
pub const LEDGER: &str = "ledger";

#[derive(Debug, Clone, PartialEq)]
pub struct RosterRecord {
    pub line: usize,
    pub username: String,
    /// `None` on the first row of a username: that rate starts at the default origin.
    pub effective: Option<NaiveDate>,
    pub rate: f64,
    pub order: i64,
    pub employment: EmploymentType,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub contractor_multiplier: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRecord {
    pub line: usize,
    /// Jobcode levels 1..4, untrimmed, in lookup priority order.
    pub jobcodes: [String; 4],
    pub date: NaiveDate,
    pub username: String,
    pub hours: f64,
    pub service_item: String,
    pub detail_code: String,
    pub notes: String,
    pub last_name: String,
}

fn line_of(index: usize) -> usize {
    index + 2
}

fn required<'a>(file: &str, line: usize, field: &'static str, value: &'a str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField {
            file: file.to_string(),
            line,
            field,
        });
    }
    Ok(v)
}

/// Parse a decimal amount, tolerating thousands separators and a leading currency sign.
pub fn parse_number(file: &str, line: usize, field: &'static str, value: &str) -> AppResult<f64> {
    let raw = required(file, line, field, value)?;
    let cleaned: String = raw
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            file: file.to_string(),
            line,
            field,
            value: raw.to_string(),
        })
}

fn parse_rank(file: &str, line: usize, field: &'static str, value: &str) -> AppResult<i64> {
    let raw = required(file, line, field, value)?;
    raw.parse::<i64>().map_err(|_| AppError::InvalidNumber {
        file: file.to_string(),
        line,
        field,
        value: raw.to_string(),
    })
}

fn parse_required_date(
    file: &str,
    line: usize,
    field: &'static str,
    value: &str,
) -> AppResult<NaiveDate> {
    let raw = required(file, line, field, value)?;
    parse_date(raw).ok_or_else(|| AppError::InvalidDate {
        file: file.to_string(),
        line,
        field,
        value: raw.to_string(),
    })
}

/// Parse roster rows. Repeated usernames must carry an effective date for their raise.
pub fn parse_roster(rows: &[RosterRow]) -> AppResult<Vec<RosterRecord>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let line = line_of(i);
        let username = required(PERSONNEL, line, "username", &row.username)?.to_string();

        let effective = if seen.contains(&username) {
            Some(parse_required_date(
                PERSONNEL,
                line,
                "effectiveDate",
                &row.effective_date,
            )?)
        } else {
            seen.insert(username.clone());
            None
        };

        let contractor_multiplier = if row.contractor_rate.trim().is_empty() {
            None
        } else {
            Some(parse_number(
                PERSONNEL,
                line,
                "contractorRate",
                &row.contractor_rate,
            )?)
        };

        out.push(RosterRecord {
            line,
            username,
            effective,
            rate: parse_number(PERSONNEL, line, "rate", &row.rate)?,
            order: parse_rank(PERSONNEL, line, "order", &row.order)?,
            employment: EmploymentType::from_code(&row.employment),
            title: row.title.trim().to_string(),
            first_name: row.fname.trim().to_string(),
            last_name: row.lname.trim().to_string(),
            contractor_multiplier,
        });
    }

    Ok(out)
}

pub fn parse_jobcodes(rows: &[JobcodeRow]) -> AppResult<Vec<JobcodeMapping>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let line = line_of(i);
            Ok(JobcodeMapping {
                client: row.client.trim().to_string(),
                main_code: row.main_jobcode.trim().to_string(),
                main_abbr: row.main_jobcode_abbreviation.trim().to_string(),
                sub_code: required(JOBCODES, line, "sub_jobcode", &row.sub_jobcode)?.to_string(),
                sub_abbr: row.sub_jobcode_abbreviation.trim().to_string(),
            })
        })
        .collect()
}

pub fn parse_ledger(rows: &[LedgerRow]) -> AppResult<Vec<LedgerRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let line = line_of(i);
            let [j1, j2, j3, j4] = row.jobcodes();

            Ok(LedgerRecord {
                line,
                jobcodes: [j1.to_string(), j2.to_string(), j3.to_string(), j4.to_string()],
                date: parse_required_date(LEDGER, line, "local_date", &row.local_date)?,
                username: row.username.trim().to_string(),
                hours: parse_number(LEDGER, line, "hours", &row.hours)?,
                service_item: row.service_item.trim().to_string(),
                detail_code: j4.trim().to_string(),
                notes: row.notes.trim().to_string(),
                last_name: row.lname.trim().to_string(),
            })
        })
        .collect()
}
