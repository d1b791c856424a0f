//! Per-ProjectMonth invoice PDFs: a summary page followed by one section per person.

use crate::config::Config;
use crate::core::billing::{EXPENSES_DESCRIPTION, InvoiceSummary, PersonLine};
use crate::core::pipeline::BuildOutcome;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::prepare_folder;
use crate::export::pdf::{PdfManager, Section};
use crate::models::ProjectMonth;
use crate::ui::messages::progress;
use crate::utils::date::us_date;
use crate::utils::formatting::{format_amount, format_percent};
use crate::utils::path::sanitize_component;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn money(currency: &str, n: f64) -> String {
    format!("{currency}{}", format_amount(n))
}

fn summary_section(inv: &InvoiceSummary, currency: &str) -> Section {
    let id = &inv.identity;

    let mut rows: Vec<Vec<String>> = inv
        .people
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.title.clone(),
                format_amount(p.total_hours),
                money(currency, p.rate),
                money(currency, p.amount),
            ]
        })
        .collect();

    if inv.has_expenses() {
        rows.push(vec![
            EXPENSES_DESCRIPTION.to_string(),
            String::new(),
            format_amount(1.0),
            money(currency, inv.expenses),
            money(currency, inv.expenses),
        ]);
    }

    if inv.has_contractor_line() {
        rows.push(vec![
            inv.contractor_description(currency),
            String::new(),
            format_amount(inv.contractor_base),
            format_percent(inv.contractor_multiplier),
            money(currency, inv.contractor_fee),
        ]);
    }

    Section {
        title: format!("Invoice {} {}", id.main_abbr, id.sub_abbr),
        preamble: vec![
            format!("Client: {}", id.client),
            format!("Project: {}", id.main_code),
            format!("Sub project: {}", id.sub_code),
            format!(
                "Period: {} ({} - {})",
                id.month_label,
                us_date(id.month_start),
                us_date(inv.period_end)
            ),
            format!("Invoice date: {}", us_date(inv.period_end)),
            format!("Due date: {}", us_date(inv.due_date)),
        ],
        headers: ["Description", "Title", "Qty", "Rate", "Amount"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
        footer: vec![format!("Total due: {}", money(currency, inv.total))],
    }
}

fn person_section(inv: &InvoiceSummary, p: &PersonLine, currency: &str) -> Section {
    let id = &inv.identity;

    Section {
        title: if p.title.is_empty() {
            p.name.clone()
        } else {
            format!("{}, {}", p.name, p.title)
        },
        preamble: vec![
            format!("Project: {} / {}", id.main_code, id.sub_code),
            format!("Period: {}", id.month_label),
            format!("Rate: {} per hour", money(currency, p.rate)),
        ],
        headers: ["Date", "Detail", "Hours", "Notes"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: p
            .entries
            .iter()
            .map(|t| {
                vec![
                    us_date(t.date),
                    t.detail().to_string(),
                    format_amount(t.hours),
                    t.notes.clone(),
                ]
            })
            .collect(),
        footer: vec![
            format!("Total hours: {}", format_amount(p.total_hours)),
            format!("Amount: {}", money(currency, p.amount)),
        ],
    }
}

/// Render one ProjectMonth to PDF bytes.
pub fn render_project_month(pm: &ProjectMonth, contractor_multiplier: f64, cfg: &Config) -> Vec<u8> {
    let inv = InvoiceSummary::compute(pm, contractor_multiplier, cfg.payment_terms_days);
    let currency = cfg.currency_symbol.as_str();

    let mut pdf = PdfManager::new();
    pdf.write_section(&summary_section(&inv, currency));
    for p in &inv.people {
        pdf.write_section(&person_section(&inv, p, currency));
    }

    pdf.finish()
}

/// Write `<out_dir>/<client>/<month>/<main> <sub>.pdf` for every ProjectMonth, in tree order.
///
/// Client folders are kept; month folders are recreated when `overwrite` is set.
pub fn generate_invoices(
    outcome: &BuildOutcome,
    cfg: &Config,
    out_dir: &Path,
    overwrite: bool,
) -> AppResult<Vec<PathBuf>> {
    prepare_folder(out_dir, false)?;
    let mut written = Vec::new();

    for client in outcome.tree.clients() {
        progress(0, &client.name);
        let client_dir = out_dir.join(sanitize_component(&client.name));
        prepare_folder(&client_dir, false)?;

        for month in client.months() {
            progress(1, &month.label);
            let month_dir = client_dir.join(sanitize_component(&month.label));
            prepare_folder(&month_dir, overwrite)?;

            for main in month.main_projects() {
                for pm in main.project_months() {
                    let bytes = render_project_month(pm, outcome.contractor_multiplier, cfg);
                    let name = sanitize_component(&format!(
                        "{} {}.pdf",
                        pm.identity.main_abbr, pm.identity.sub_abbr
                    ));
                    let path = month_dir.join(&name);

                    fs::write(&path, bytes).map_err(|e| {
                        AppError::Export(format!("cannot write '{}': {e}", path.display()))
                    })?;

                    progress(2, &name);
                    info!(path = %path.display(), "invoice written");
                    written.push(path);
                }
            }
        }
    }

    Ok(written)
}
