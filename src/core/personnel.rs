use crate::errors::{AppError, AppResult};
use crate::input::RosterRecord;
use crate::models::{PersonRecord, RateChange};
use crate::utils::date::default_origin;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-person records keyed by username, plus the contractor billing multiplier.
#[derive(Debug, Clone)]
pub struct PersonnelIndex {
    people: HashMap<String, PersonRecord>,
    pub contractor_multiplier: f64,
}

impl PersonnelIndex {
    /// Fold roster records into one record per username.
    ///
    /// The first occurrence sets identity, rank, type and title and seeds a rate effective from
    /// the default origin; later occurrences only append raises.
    /// The contractor multiplier comes from the first record.
    pub fn build(records: &[RosterRecord]) -> AppResult<Self> {
        let first = records.first().ok_or(AppError::EmptyRoster)?;
        let contractor_multiplier = first.contractor_multiplier.unwrap_or_else(|| {
            warn!(line = first.line, "contractor multiplier missing on first roster row, using 0");
            0.0
        });

        let mut people: HashMap<String, PersonRecord> = HashMap::new();

        for r in records {
            if let Some(person) = people.get_mut(&r.username) {
                person.rates.push(RateChange {
                    effective: r.effective.unwrap_or_else(default_origin),
                    rate: r.rate,
                });
                debug!(username = %r.username, rate = r.rate, "rate change appended");
                continue;
            }

            people.insert(
                r.username.clone(),
                PersonRecord {
                    username: r.username.clone(),
                    first_name: r.first_name.clone(),
                    last_name: r.last_name.clone(),
                    employment: r.employment.clone(),
                    title: r.title.clone(),
                    order: r.order,
                    rates: vec![RateChange {
                        effective: default_origin(),
                        rate: r.rate,
                    }],
                },
            );
        }

        Ok(Self {
            people,
            contractor_multiplier,
        })
    }

    pub fn get(&self, username: &str) -> Option<&PersonRecord> {
        self.people.get(username)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.people.values()
    }
}
