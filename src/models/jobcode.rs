use serde::Serialize;

/// Canonical identity of a sub-project, keyed by `sub_code` in the jobcode table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobcodeMapping {
    pub client: String,
    pub main_code: String,
    pub main_abbr: String,
    pub sub_code: String,
    pub sub_abbr: String,
}
