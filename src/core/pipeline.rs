use crate::config::Config;
use crate::core::builder::{ErrorPolicy, build_tree};
use crate::core::jobcode::JobcodeTable;
use crate::core::personnel::PersonnelIndex;
use crate::core::tree::AggregationTree;
use crate::errors::{AppResult, RowError};
use crate::input::{JobcodeRow, LedgerRow, RosterRow, loader, parse_jobcodes, parse_ledger, parse_roster};
use tracing::info;

/// The three raw inputs, already split into rows of named text fields.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub roster: Vec<RosterRow>,
    pub jobcodes: Vec<JobcodeRow>,
    pub ledger: Vec<LedgerRow>,
}

/// Result of one run: the read-only tree plus everything the renderer needs next to it.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub tree: AggregationTree,
    pub personnel: PersonnelIndex,
    pub contractor_multiplier: f64,
    /// Rows skipped under `ErrorPolicy::Collect`.
    pub rejected: Vec<RowError>,
}

/// High-level business logic: inputs → resolved, grouped and ordered tree.
pub struct InvoiceLogic;

impl InvoiceLogic {
    /// Read the three CSV files named in the configuration.
    pub fn load(cfg: &Config) -> AppResult<RawInputs> {
        Ok(RawInputs {
            roster: loader::read_roster(&cfg.personnel_path())?,
            jobcodes: loader::read_jobcodes(&cfg.jobcodes_path())?,
            ledger: loader::read_ledger(&cfg.ledger_path())?,
        })
    }

    pub fn process(raw: &RawInputs, expense_sentinel: &str, policy: ErrorPolicy) -> AppResult<BuildOutcome> {
        let roster = parse_roster(&raw.roster)?;
        let personnel = PersonnelIndex::build(&roster)?;
        info!(people = personnel.len(), multiplier = personnel.contractor_multiplier, "personnel indexed");

        let jobcodes = JobcodeTable::build(parse_jobcodes(&raw.jobcodes)?);
        info!(jobcodes = jobcodes.len(), "jobcode table built");

        let ledger = parse_ledger(&raw.ledger)?;
        let (tree, rejected) = build_tree(&personnel, &jobcodes, &ledger, expense_sentinel, policy)?;
        info!(
            rows = ledger.len(),
            rejected = rejected.len(),
            project_months = tree.project_months().count(),
            "aggregation tree built"
        );

        let contractor_multiplier = personnel.contractor_multiplier;
        Ok(BuildOutcome {
            tree,
            personnel,
            contractor_multiplier,
            rejected,
        })
    }

    /// Load and process with the configured error policy.
    pub fn run(cfg: &Config) -> AppResult<BuildOutcome> {
        let raw = Self::load(cfg)?;
        Self::process(&raw, &cfg.expense_sentinel, cfg.error_policy)
    }
}
