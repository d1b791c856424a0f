//! Input boundary: raw CSV rows and their conversion into typed records.

pub mod loader;
pub mod parse;
pub mod rows;

pub use parse::{LedgerRecord, RosterRecord, parse_jobcodes, parse_ledger, parse_roster};
pub use rows::{JobcodeRow, LedgerRow, RosterRow};
