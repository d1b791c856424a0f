//! Invoice figures for one ProjectMonth.

use crate::models::{PersonMonth, ProjectIdentity, ProjectMonth, TimeEntry};
use crate::utils::date::{month_end, plus_days};
use crate::utils::formatting::{format_amount, format_percent};
use chrono::NaiveDate;
use serde::Serialize;

pub const EXPENSES_DESCRIPTION: &str = "Reimbursable Expenses (see provided documentation and logs)";

#[derive(Debug, Clone, Serialize)]
pub struct PersonLine {
    pub name: String,
    pub title: String,
    pub employment: String,
    pub rate: f64,
    pub total_hours: f64,
    pub amount: f64,
    pub entries: Vec<TimeEntry>,
}

impl PersonLine {
    fn from_person(p: &PersonMonth) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            employment: p.employment.code().to_string(),
            rate: p.rate,
            total_hours: p.total_hours(),
            amount: p.amount(),
            entries: p.time.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub identity: ProjectIdentity,
    pub people: Vec<PersonLine>,
    pub labor_total: f64,
    pub expenses: f64,
    pub contractor_multiplier: f64,
    /// Non-FTE person amounts, then the expense total when there is one.
    pub contractor_amounts: Vec<f64>,
    pub contractor_base: f64,
    pub contractor_fee: f64,
    pub total: f64,
    pub period_end: NaiveDate,
    pub due_date: NaiveDate,
}

impl InvoiceSummary {
    pub fn compute(pm: &ProjectMonth, contractor_multiplier: f64, terms_days: u32) -> Self {
        let people: Vec<PersonLine> = pm.people().map(PersonLine::from_person).collect();

        let labor_total: f64 = people.iter().map(|p| p.amount).sum();

        let mut contractor_amounts: Vec<f64> = pm
            .people()
            .filter(|p| p.employment.is_contractor())
            .map(PersonMonth::amount)
            .collect();
        if pm.expenses > 0.0 {
            contractor_amounts.push(pm.expenses);
        }

        let contractor_base: f64 = contractor_amounts.iter().sum();
        let contractor_fee = contractor_base * contractor_multiplier;
        let period_end = month_end(pm.identity.month_start);

        Self {
            identity: pm.identity.clone(),
            people,
            labor_total,
            expenses: pm.expenses,
            contractor_multiplier,
            contractor_amounts,
            contractor_base,
            contractor_fee,
            total: labor_total + contractor_fee,
            period_end,
            due_date: plus_days(period_end, terms_days),
        }
    }

    pub fn has_expenses(&self) -> bool {
        self.expenses > 0.0
    }

    pub fn has_contractor_line(&self) -> bool {
        self.contractor_base > 0.0
    }

    /// "General / Admin ($a + $b) * 5%"; parentheses only with more than one amount.
    pub fn contractor_description(&self, currency: &str) -> String {
        let parts: Vec<String> = self
            .contractor_amounts
            .iter()
            .map(|a| format!("{currency}{}", format_amount(*a)))
            .collect();

        let joined = if parts.len() > 1 {
            format!("({})", parts.join(" + "))
        } else {
            parts.join("")
        };

        format!(
            "General / Admin {joined} * {}",
            format_percent(self.contractor_multiplier)
        )
    }
}
