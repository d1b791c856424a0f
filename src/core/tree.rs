//! The aggregation tree: client → month label → main-project abbreviation →
//! sub-project abbreviation → ProjectMonth.
//!
//! Only `TreeBuilder` can create or mutate nodes. Once `finish` attaches the ordered key
//! sequences the tree is handed out read-only.

use crate::models::ProjectMonth;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregationTree {
    pub(crate) clients: HashMap<String, ClientNode>,
    /// First-appearance order in the ledger.
    pub(crate) client_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientNode {
    pub name: String,
    pub(crate) months: HashMap<String, MonthNode>,
    pub(crate) month_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthNode {
    pub label: String,
    pub(crate) mains: HashMap<String, MainProjectNode>,
    pub(crate) main_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MainProjectNode {
    pub abbr: String,
    pub(crate) subs: HashMap<String, ProjectMonth>,
    pub(crate) sub_order: Vec<String>,
}

impl AggregationTree {
    pub fn clients(&self) -> impl Iterator<Item = &ClientNode> {
        self.client_order.iter().filter_map(|c| self.clients.get(c))
    }

    pub fn client(&self, name: &str) -> Option<&ClientNode> {
        self.clients.get(name)
    }

    pub fn client_names(&self) -> &[String] {
        &self.client_order
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Every ProjectMonth in tree order.
    pub fn project_months(&self) -> impl Iterator<Item = &ProjectMonth> {
        self.clients()
            .flat_map(ClientNode::months)
            .flat_map(MonthNode::main_projects)
            .flat_map(MainProjectNode::project_months)
    }

    /// Direct lookup by the four path segments.
    pub fn get(&self, client: &str, month: &str, main: &str, sub: &str) -> Option<&ProjectMonth> {
        self.clients
            .get(client)?
            .months
            .get(month)?
            .mains
            .get(main)?
            .subs
            .get(sub)
    }
}

impl ClientNode {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            months: HashMap::new(),
            month_order: Vec::new(),
        }
    }

    /// Chronological.
    pub fn months(&self) -> impl Iterator<Item = &MonthNode> {
        self.month_order.iter().filter_map(|m| self.months.get(m))
    }

    pub fn month(&self, label: &str) -> Option<&MonthNode> {
        self.months.get(label)
    }

    pub fn month_labels(&self) -> &[String] {
        &self.month_order
    }
}

impl MonthNode {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            mains: HashMap::new(),
            main_order: Vec::new(),
        }
    }

    pub fn main_projects(&self) -> impl Iterator<Item = &MainProjectNode> {
        self.main_order.iter().filter_map(|m| self.mains.get(m))
    }

    pub fn main_project(&self, abbr: &str) -> Option<&MainProjectNode> {
        self.mains.get(abbr)
    }

    pub fn main_abbrs(&self) -> &[String] {
        &self.main_order
    }
}

impl MainProjectNode {
    pub(crate) fn new(abbr: &str) -> Self {
        Self {
            abbr: abbr.to_string(),
            subs: HashMap::new(),
            sub_order: Vec::new(),
        }
    }

    pub fn project_months(&self) -> impl Iterator<Item = &ProjectMonth> {
        self.sub_order.iter().filter_map(|s| self.subs.get(s))
    }

    pub fn project_month(&self, sub_abbr: &str) -> Option<&ProjectMonth> {
        self.subs.get(sub_abbr)
    }

    pub fn sub_abbrs(&self) -> &[String] {
        &self.sub_order
    }
}
