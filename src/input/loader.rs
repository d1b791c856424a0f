use super::rows::{JobcodeRow, LedgerRow, RosterRow};
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Deserialize every record of a headed CSV source.
pub fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> AppResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for record in rdr.deserialize() {
        out.push(record?);
    }
    Ok(out)
}

fn read_file<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::from(io::Error::new(
            e.kind(),
            format!("cannot open '{}': {e}", path.display()),
        ))
    })?;

    let rows = read_rows(file)?;
    debug!(path = %path.display(), rows = rows.len(), "read csv");
    Ok(rows)
}

pub fn read_roster(path: &Path) -> AppResult<Vec<RosterRow>> {
    read_file(path)
}

pub fn read_jobcodes(path: &Path) -> AppResult<Vec<JobcodeRow>> {
    read_file(path)
}

pub fn read_ledger(path: &Path) -> AppResult<Vec<LedgerRow>> {
    read_file(path)
}
