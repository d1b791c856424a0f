//! Unified application error type.
//! All modules (input, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input parsing (field-level context)
    // ---------------------------
    #[error("{file}:{line}: missing value for field '{field}'")]
    MissingField {
        file: String,
        line: usize,
        field: &'static str,
    },

    #[error("{file}:{line}: invalid date in field '{field}': '{value}'")]
    InvalidDate {
        file: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("{file}:{line}: invalid number in field '{field}': '{value}'")]
    InvalidNumber {
        file: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Personnel roster is empty: the contractor multiplier cannot be read")]
    EmptyRoster,

    // ---------------------------
    // Data integrity
    // ---------------------------
    #[error(
        "ledger line {line}: jobcode not found in jobcode table: [{}]",
        .candidates.join(" | ")
    )]
    UnresolvedJobcode { line: usize, candidates: [String; 4] },

    #[error("ledger line {line}: username missing in personnel roster: '{username}'")]
    UnknownPerson { line: usize, username: String },

    #[error("{} ledger row(s) rejected", .0.len())]
    IntegrityErrors(Vec<RowError>),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the two data-integrity kinds rooted in inconsistent input files.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            AppError::UnresolvedJobcode { .. }
                | AppError::UnknownPerson { .. }
                | AppError::IntegrityErrors(_)
        )
    }
}

/// A ledger row rejected by the hierarchy builder.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    UnresolvedJobcode { line: usize, candidates: [String; 4] },
    UnknownPerson { line: usize, username: String },
}

impl RowError {
    pub fn line(&self) -> usize {
        match self {
            RowError::UnresolvedJobcode { line, .. } | RowError::UnknownPerson { line, .. } => *line,
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AppError::from(self.clone()))
    }
}

impl From<RowError> for AppError {
    fn from(e: RowError) -> Self {
        match e {
            RowError::UnresolvedJobcode { line, candidates } => {
                AppError::UnresolvedJobcode { line, candidates }
            }
            RowError::UnknownPerson { line, username } => AppError::UnknownPerson { line, username },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
