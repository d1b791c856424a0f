//! Format checks for assumptions the ordering and expense handling rely on.
//! Findings are warnings: the tree is still built and ordered as usual.

use crate::core::ordering::SUB_PREFIX_WIDTH;
use crate::core::tree::AggregationTree;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static MAIN_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]-?\d{1,2}$").expect("valid main code regex"));

static SUB_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\d{{{SUB_PREFIX_WIDTH}}}")).expect("valid sub prefix regex")
});

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finding {
    /// Main-project abbreviation is not one letter + 1-2 digit suffix.
    MainCodeFormat { client: String, abbr: String },
    /// Sub-project abbreviation lacks the fixed-width numeric prefix.
    SubCodeFormat { client: String, abbr: String },
    /// More than one expense line hit one ProjectMonth; only the last one counts.
    ExpenseOverwritten {
        client: String,
        month: String,
        sub_abbr: String,
        rows: usize,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MainCodeFormat { client, abbr } => write!(
                f,
                "{client}: main project '{abbr}' does not look like L-NN, ordering may be off"
            ),
            Finding::SubCodeFormat { client, abbr } => write!(
                f,
                "{client}: sub project '{abbr}' has no {SUB_PREFIX_WIDTH}-digit prefix, it sorts last"
            ),
            Finding::ExpenseOverwritten {
                client,
                month,
                sub_abbr,
                rows,
            } => write!(
                f,
                "{client} / {month} / {sub_abbr}: {rows} expense lines, only the last one was kept"
            ),
        }
    }
}

pub fn audit(tree: &AggregationTree) -> Vec<Finding> {
    let mut findings = BTreeSet::new();

    for client in tree.clients() {
        for month in client.months() {
            for main in month.main_projects() {
                if !MAIN_CODE_RE.is_match(&main.abbr) {
                    findings.insert(Finding::MainCodeFormat {
                        client: client.name.clone(),
                        abbr: main.abbr.clone(),
                    });
                }

                for pm in main.project_months() {
                    if !SUB_PREFIX_RE.is_match(&pm.identity.sub_abbr) {
                        findings.insert(Finding::SubCodeFormat {
                            client: client.name.clone(),
                            abbr: pm.identity.sub_abbr.clone(),
                        });
                    }

                    if pm.expense_rows > 1 {
                        findings.insert(Finding::ExpenseOverwritten {
                            client: client.name.clone(),
                            month: month.label.clone(),
                            sub_abbr: pm.identity.sub_abbr.clone(),
                            rows: pm.expense_rows,
                        });
                    }
                }
            }
        }
    }

    findings.into_iter().collect()
}
