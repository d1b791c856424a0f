use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::InvoiceLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let outcome = InvoiceLogic::run(cfg)?;
        super::report_rejected(&outcome);
        ExportLogic::export(&outcome, cfg, *format, file, *force)?;
    }
    Ok(())
}
