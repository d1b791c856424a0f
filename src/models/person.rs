use chrono::NaiveDate;
use serde::Serialize;

/// Employment type as written in the roster's `type` column.
/// Anything that is not `FTE` is billed with the contractor multiplier on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EmploymentType {
    Fte,
    Other(String),
}

impl EmploymentType {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "FTE" => EmploymentType::Fte,
            other => EmploymentType::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            EmploymentType::Fte => "FTE",
            EmploymentType::Other(s) => s,
        }
    }

    pub fn is_contractor(&self) -> bool {
        !matches!(self, EmploymentType::Fte)
    }
}

/// One (effective date, rate) pair of a person's rate history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateChange {
    pub effective: NaiveDate,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonRecord {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub employment: EmploymentType,
    pub title: String,
    /// Display rank on invoices, lower sorts first.
    pub order: i64,
    /// Never empty; the first entry is effective from the default origin.
    pub rates: Vec<RateChange>,
}

impl PersonRecord {
    /// "First Last", the key used for people inside a ProjectMonth.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
