//! Raw CSV rows as exported by the roster sheet, the jobcode sheet and the accounting
//! system. Every field is kept as text; `input::parse` turns them into typed records.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterRow {
    #[serde(default)]
    pub username: String,
    #[serde(default, rename = "effectiveDate")]
    pub effective_date: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub order: String,
    #[serde(default, rename = "type")]
    pub employment: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default, rename = "contractorRate")]
    pub contractor_rate: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobcodeRow {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub main_jobcode: String,
    #[serde(default)]
    pub main_jobcode_abbreviation: String,
    #[serde(default)]
    pub sub_jobcode: String,
    #[serde(default)]
    pub sub_jobcode_abbreviation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerRow {
    #[serde(default)]
    pub jobcode_1: String,
    #[serde(default)]
    pub jobcode_2: String,
    #[serde(default)]
    pub jobcode_3: String,
    #[serde(default)]
    pub jobcode_4: String,
    #[serde(default)]
    pub local_date: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default, rename = "service item")]
    pub service_item: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub lname: String,
}

impl LedgerRow {
    /// The four jobcode candidates in lookup priority order.
    pub fn jobcodes(&self) -> [&str; 4] {
        [&self.jobcode_1, &self.jobcode_2, &self.jobcode_3, &self.jobcode_4]
    }
}
