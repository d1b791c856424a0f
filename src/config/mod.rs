use crate::core::builder::{ErrorPolicy, EXPENSE_SENTINEL};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_personnel_file")]
    pub personnel_file: String,
    #[serde(default = "default_jobcodes_file")]
    pub jobcodes_file: String,
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Value of the ledger's `lname` column that marks an expense line.
    #[serde(default = "default_expense_sentinel")]
    pub expense_sentinel: String,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    #[serde(default = "default_payment_terms")]
    pub payment_terms_days: u32,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_personnel_file() -> String {
    "personnel.csv".to_string()
}
fn default_jobcodes_file() -> String {
    "jobcodes.csv".to_string()
}
fn default_ledger_file() -> String {
    "quickbooks_data.csv".to_string()
}
fn default_output_dir() -> String {
    "Invoices".to_string()
}
fn default_expense_sentinel() -> String {
    EXPENSE_SENTINEL.to_string()
}
fn default_payment_terms() -> u32 {
    30
}
fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            personnel_file: default_personnel_file(),
            jobcodes_file: default_jobcodes_file(),
            ledger_file: default_ledger_file(),
            output_dir: default_output_dir(),
            expense_sentinel: default_expense_sentinel(),
            error_policy: ErrorPolicy::default(),
            payment_terms_days: default_payment_terms(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rinvoicer")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinvoicer.conf")
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file (left untouched in test mode).
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    pub fn personnel_path(&self) -> PathBuf {
        expand_tilde(&self.personnel_file)
    }

    pub fn jobcodes_path(&self) -> PathBuf {
        expand_tilde(&self.jobcodes_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger_file)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }
}
