//! Single-pass construction of the aggregation tree from ledger records.

use crate::core::jobcode::JobcodeTable;
use crate::core::ordering::{KeyKind, order_by_rank, order_keys};
use crate::core::personnel::PersonnelIndex;
use crate::core::rate::resolve_rate;
use crate::core::tree::{AggregationTree, ClientNode, MainProjectNode, MonthNode};
use crate::errors::{AppError, AppResult, RowError};
use crate::input::LedgerRecord;
use crate::models::{JobcodeMapping, PersonMonth, PersonRecord, ProjectIdentity, ProjectMonth, TimeEntry};
use crate::utils::date::{month_label, month_start};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// Default value of the ledger's `lname` column that marks an expense line.
pub const EXPENSE_SENTINEL: &str = "Expenses";

/// What to do with a ledger row that fails jobcode or person resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first rejected row and return its error.
    #[default]
    Abort,
    /// Skip rejected rows, keep building and report them all at the end.
    Collect,
}

/// Accumulates ledger rows into the tree. Each row is fully resolved before any node is
/// touched, so a rejected row leaves the tree exactly as it was.
pub struct TreeBuilder<'a> {
    personnel: &'a PersonnelIndex,
    jobcodes: &'a JobcodeTable,
    expense_sentinel: String,
    tree: AggregationTree,
    rows: usize,
}

enum Line<'a> {
    Expense,
    Time(&'a PersonRecord),
}

impl<'a> TreeBuilder<'a> {
    pub fn new(personnel: &'a PersonnelIndex, jobcodes: &'a JobcodeTable) -> Self {
        Self {
            personnel,
            jobcodes,
            expense_sentinel: EXPENSE_SENTINEL.to_string(),
            tree: AggregationTree::default(),
            rows: 0,
        }
    }

    pub fn with_expense_sentinel(mut self, sentinel: &str) -> Self {
        self.expense_sentinel = sentinel.to_string();
        self
    }

    /// Classify and insert one ledger row.
    pub fn insert(&mut self, rec: &LedgerRecord) -> Result<(), RowError> {
        let jobcodes = self.jobcodes;
        let personnel = self.personnel;

        let mapping = jobcodes.resolve(rec.line, &rec.jobcodes)?;

        let line = if rec.last_name == self.expense_sentinel {
            Line::Expense
        } else {
            let person = personnel
                .get(&rec.username)
                .ok_or_else(|| RowError::UnknownPerson {
                    line: rec.line,
                    username: rec.username.clone(),
                })?;
            Line::Time(person)
        };

        // From here on the row is committed.
        let label = month_label(rec.date);
        let pm = self.project_month_mut(mapping, &label, rec.date);

        match line {
            Line::Expense => {
                if pm.expense_rows > 0 {
                    warn!(
                        line = rec.line,
                        client = %pm.identity.client,
                        month = %label,
                        sub = %pm.identity.sub_abbr,
                        previous = pm.expenses,
                        new = rec.hours,
                        "second expense line for the same project month overwrites the first"
                    );
                }
                pm.expenses = rec.hours;
                pm.expense_rows += 1;
            }
            Line::Time(person) => {
                let entry = TimeEntry {
                    date: rec.date,
                    hours: rec.hours,
                    service_item: rec.service_item.clone(),
                    detail_code: rec.detail_code.clone(),
                    notes: rec.notes.clone(),
                };
                add_time(pm, person, entry);
            }
        }

        self.rows += 1;
        debug!(line = rec.line, client = %mapping.client, month = %label, sub = %mapping.sub_abbr, "row inserted");
        Ok(())
    }

    fn project_month_mut(
        &mut self,
        mapping: &JobcodeMapping,
        label: &str,
        date: chrono::NaiveDate,
    ) -> &mut ProjectMonth {
        let tree = &mut self.tree;

        if !tree.clients.contains_key(&mapping.client) {
            tree.client_order.push(mapping.client.clone());
        }

        let client = tree
            .clients
            .entry(mapping.client.clone())
            .or_insert_with(|| ClientNode::new(&mapping.client));
        let month = client
            .months
            .entry(label.to_string())
            .or_insert_with(|| MonthNode::new(label));
        let main = month
            .mains
            .entry(mapping.main_abbr.clone())
            .or_insert_with(|| MainProjectNode::new(&mapping.main_abbr));

        main.subs.entry(mapping.sub_abbr.clone()).or_insert_with(|| {
            ProjectMonth::new(ProjectIdentity {
                client: mapping.client.clone(),
                month_label: label.to_string(),
                main_code: mapping.main_code.clone(),
                main_abbr: mapping.main_abbr.clone(),
                sub_code: mapping.sub_code.clone(),
                sub_abbr: mapping.sub_abbr.clone(),
                month_start: month_start(date),
            })
        })
    }

    pub fn rows_inserted(&self) -> usize {
        self.rows
    }

    /// Attach the ordered key sequences and hand out the read-only tree.
    pub fn finish(self) -> AggregationTree {
        let mut tree = self.tree;

        for client in tree.clients.values_mut() {
            for month in client.months.values_mut() {
                for main in month.mains.values_mut() {
                    for pm in main.subs.values_mut() {
                        let people = &pm.people;
                        order_by_rank(&mut pm.people_order, |name| {
                            people.get(name).map(|p| p.order).unwrap_or(i64::MAX)
                        });
                    }
                    main.sub_order = order_keys(&main.subs, KeyKind::SubProjectCode);
                }
                month.main_order = order_keys(&month.mains, KeyKind::MainProjectCode);
            }
            client.month_order = order_keys(&client.months, KeyKind::MonthYear);
        }

        tree
    }
}

/// The rate is resolved once, on the person's first entry in this ProjectMonth.
fn add_time(pm: &mut ProjectMonth, person: &PersonRecord, entry: TimeEntry) {
    let name = person.display_name();

    match pm.people.entry(name.clone()) {
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            if existing.username != person.username {
                warn!(
                    name = %name,
                    first = %existing.username,
                    other = %person.username,
                    "two usernames share a display name; time is merged under the first"
                );
            }
            existing.time.push(entry);
        }
        Entry::Vacant(slot) => {
            let rate = resolve_rate(&person.rates, entry.date).unwrap_or_default();
            slot.insert(PersonMonth {
                username: person.username.clone(),
                name: name.clone(),
                first_name: person.first_name.clone(),
                last_name: person.last_name.clone(),
                order: person.order,
                employment: person.employment.clone(),
                title: person.title.clone(),
                rate,
                time: vec![entry],
            });
            pm.people_order.push(name);
        }
    }
}

/// Run the whole pass over `records` under `policy`.
///
/// Returns the tree and the rows rejected under `ErrorPolicy::Collect`.
pub fn build_tree(
    personnel: &PersonnelIndex,
    jobcodes: &JobcodeTable,
    records: &[LedgerRecord],
    expense_sentinel: &str,
    policy: ErrorPolicy,
) -> AppResult<(AggregationTree, Vec<RowError>)> {
    let mut builder = TreeBuilder::new(personnel, jobcodes).with_expense_sentinel(expense_sentinel);
    let mut rejected = Vec::new();

    for rec in records {
        if let Err(e) = builder.insert(rec) {
            match policy {
                ErrorPolicy::Abort => return Err(AppError::from(e)),
                ErrorPolicy::Collect => {
                    warn!(line = e.line(), error = %e, "ledger row rejected");
                    rejected.push(e);
                }
            }
        }
    }

    debug!(rows = builder.rows_inserted(), rejected = rejected.len(), "ledger pass complete");
    Ok((builder.finish(), rejected))
}
