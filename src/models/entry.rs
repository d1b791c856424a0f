use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub service_item: String,
    /// Fourth-level jobcode of the ledger row, often empty.
    pub detail_code: String,
    pub notes: String,
}

impl TimeEntry {
    /// Detail shown on an invoice line: the fourth-level code, or the service item when blank.
    pub fn detail(&self) -> &str {
        if self.detail_code.is_empty() {
            &self.service_item
        } else {
            &self.detail_code
        }
    }
}
