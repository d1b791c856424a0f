use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::builder::ErrorPolicy;
use crate::core::validate::audit;
use crate::core::InvoiceLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};

/// Build in collect mode and report every problem at once.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check = cmd {
        let raw = InvoiceLogic::load(cfg)?;
        let outcome = InvoiceLogic::process(&raw, &cfg.expense_sentinel, ErrorPolicy::Collect)?;

        for e in &outcome.rejected {
            error(e);
        }

        let findings = audit(&outcome.tree);
        for f in &findings {
            warning(f);
        }

        if !outcome.rejected.is_empty() {
            return Err(AppError::IntegrityErrors(outcome.rejected));
        }

        success(format!(
            "{} ledger rows classified, {} warning(s)",
            raw.ledger.len(),
            findings.len()
        ));
    }
    Ok(())
}
