// src/export/model.rs

use crate::core::billing::InvoiceSummary;
use crate::core::tree::AggregationTree;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Labor,
    Expenses,
    ContractorFee,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Labor => "labor",
            LineKind::Expenses => "expenses",
            LineKind::ContractorFee => "contractor_fee",
        }
    }
}

/// Flat invoice line: one per person, plus expense and contractor-fee lines, per ProjectMonth.
#[derive(Serialize, Clone, Debug)]
pub struct InvoiceLineExport {
    pub client: String,
    pub month: String,
    pub main_project: String,
    pub sub_project: String,
    pub kind: LineKind,
    pub name: String,
    pub title: String,
    pub employment: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "client",
        "month",
        "main_project",
        "sub_project",
        "kind",
        "name",
        "title",
        "employment",
        "quantity",
        "rate",
        "amount",
    ]
}

pub(crate) fn line_to_row(l: &InvoiceLineExport) -> Vec<String> {
    vec![
        l.client.clone(),
        l.month.clone(),
        l.main_project.clone(),
        l.sub_project.clone(),
        l.kind.as_str().to_string(),
        l.name.clone(),
        l.title.clone(),
        l.employment.clone(),
        format!("{:.2}", l.quantity),
        format!("{:.4}", l.rate)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        format!("{:.2}", l.amount),
    ]
}

pub(crate) fn lines_to_table(lines: &[InvoiceLineExport]) -> Vec<Vec<String>> {
    lines.iter().map(line_to_row).collect()
}

/// Walk the tree in order and flatten every ProjectMonth's invoice.
pub(crate) fn collect_lines(
    tree: &AggregationTree,
    contractor_multiplier: f64,
    terms_days: u32,
) -> Vec<InvoiceLineExport> {
    let mut lines = Vec::new();

    for pm in tree.project_months() {
        let inv = InvoiceSummary::compute(pm, contractor_multiplier, terms_days);
        let id = &inv.identity;

        let base = |kind: LineKind, name: &str| InvoiceLineExport {
            client: id.client.clone(),
            month: id.month_label.clone(),
            main_project: id.main_abbr.clone(),
            sub_project: id.sub_abbr.clone(),
            kind,
            name: name.to_string(),
            title: String::new(),
            employment: String::new(),
            quantity: 0.0,
            rate: 0.0,
            amount: 0.0,
        };

        for p in &inv.people {
            lines.push(InvoiceLineExport {
                title: p.title.clone(),
                employment: p.employment.clone(),
                quantity: p.total_hours,
                rate: p.rate,
                amount: p.amount,
                ..base(LineKind::Labor, &p.name)
            });
        }

        if inv.has_expenses() {
            lines.push(InvoiceLineExport {
                quantity: 1.0,
                rate: inv.expenses,
                amount: inv.expenses,
                ..base(LineKind::Expenses, "Expenses")
            });
        }

        if inv.has_contractor_line() {
            lines.push(InvoiceLineExport {
                quantity: inv.contractor_base,
                rate: inv.contractor_multiplier,
                amount: inv.contractor_fee,
                ..base(LineKind::ContractorFee, "General / Admin")
            });
        }
    }

    lines
}
