use crate::errors::RowError;
use crate::models::JobcodeMapping;
use std::collections::HashMap;

/// Jobcode lookup keyed by sub-project code exactly as it appears in the ledger.
#[derive(Debug, Clone, Default)]
pub struct JobcodeTable {
    by_sub_code: HashMap<String, JobcodeMapping>,
}

impl JobcodeTable {
    /// A later mapping with the same sub-project code replaces the earlier one.
    pub fn build(mappings: impl IntoIterator<Item = JobcodeMapping>) -> Self {
        let mut by_sub_code = HashMap::new();
        for m in mappings {
            by_sub_code.insert(m.sub_code.clone(), m);
        }
        Self { by_sub_code }
    }

    pub fn get(&self, sub_code: &str) -> Option<&JobcodeMapping> {
        self.by_sub_code.get(sub_code)
    }

    pub fn len(&self) -> usize {
        self.by_sub_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sub_code.is_empty()
    }

    /// Resolve a ledger row's four jobcode fields, level 1 first.
    /// Each candidate is trimmed before lookup; the error keeps the raw values.
    pub fn resolve(&self, line: usize, candidates: &[String; 4]) -> Result<&JobcodeMapping, RowError> {
        candidates
            .iter()
            .find_map(|c| self.by_sub_code.get(c.trim()))
            .ok_or_else(|| RowError::UnresolvedJobcode {
                line,
                candidates: candidates.clone(),
            })
    }
}
