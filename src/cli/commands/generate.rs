use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::InvoiceLogic;
use crate::errors::AppResult;
use crate::export::generate_invoices;
use crate::ui::messages::{header, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { out, overwrite } = cmd {
        let outcome = InvoiceLogic::run(cfg)?;
        super::report_rejected(&outcome);

        let out_dir = match out {
            Some(dir) => expand_tilde(dir),
            None => cfg.output_path(),
        };

        header(format!("Invoices → {}", out_dir.display()));
        let written = generate_invoices(&outcome, cfg, &out_dir, *overwrite)?;

        if written.is_empty() {
            warning("No project months found. Nothing to generate.");
        } else {
            success(format!("{} invoice(s) written to {}", written.len(), out_dir.display()));
        }
    }
    Ok(())
}
