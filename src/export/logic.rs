// src/export/logic.rs

use crate::config::Config;
use crate::core::pipeline::BuildOutcome;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{collect_lines, get_headers, lines_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High-level export logic: flat invoice lines in one file.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every ProjectMonth's invoice lines, in tree order.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: output file path
    /// - `force`: overwrite without asking
    pub fn export(
        outcome: &BuildOutcome,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let lines = collect_lines(
            &outcome.tree,
            outcome.contractor_multiplier,
            cfg.payment_terms_days,
        );

        if lines.is_empty() {
            warning("No invoice lines found. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&lines, path)?,
            ExportFormat::Json => export_json(&lines, path)?,
            ExportFormat::Xlsx => export_xlsx(&lines, path)?,
            ExportFormat::Pdf => {
                info(format!("Exporting to PDF: {}", path.display()));

                let mut pdf = PdfManager::new();
                pdf.write_table("Invoice lines", &get_headers(), &lines_to_table(&lines));
                pdf.save(path)?;

                notify_export_success("PDF", path);
            }
        }

        Ok(())
    }
}
