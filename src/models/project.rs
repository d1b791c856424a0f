use super::{EmploymentType, TimeEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Snapshot of the project a ProjectMonth bills, taken from the ledger row that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub client: String,
    pub month_label: String,
    pub main_code: String,
    pub main_abbr: String,
    pub sub_code: String,
    pub sub_abbr: String,
    pub month_start: NaiveDate,
}

/// One person's time within a ProjectMonth. The rate is fixed when the person is first seen.
#[derive(Debug, Clone, Serialize)]
pub struct PersonMonth {
    pub username: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub order: i64,
    pub employment: EmploymentType,
    pub title: String,
    pub rate: f64,
    pub time: Vec<TimeEntry>,
}

impl PersonMonth {
    pub fn total_hours(&self) -> f64 {
        self.time.iter().map(|t| t.hours).sum()
    }

    pub fn amount(&self) -> f64 {
        self.rate * self.total_hours()
    }
}

/// The unit of invoicing: one sub-project within one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMonth {
    pub identity: ProjectIdentity,
    pub expenses: f64,
    /// How many expense rows hit this ProjectMonth; more than one means earlier values were overwritten.
    pub expense_rows: usize,
    pub(crate) people: HashMap<String, PersonMonth>,
    pub(crate) people_order: Vec<String>,
}

impl ProjectMonth {
    pub(crate) fn new(identity: ProjectIdentity) -> Self {
        Self {
            identity,
            expenses: 0.0,
            expense_rows: 0,
            people: HashMap::new(),
            people_order: Vec::new(),
        }
    }

    /// People in display order (rank ascending, arrival order for equal ranks).
    pub fn people(&self) -> impl Iterator<Item = &PersonMonth> {
        self.people_order.iter().filter_map(|n| self.people.get(n))
    }

    pub fn person(&self, name: &str) -> Option<&PersonMonth> {
        self.people.get(name)
    }

    pub fn person_names(&self) -> &[String] {
        &self.people_order
    }

    pub fn total_hours(&self) -> f64 {
        self.people().map(PersonMonth::total_hours).sum()
    }
}
