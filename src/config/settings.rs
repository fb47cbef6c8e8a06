//! User settings
//!
//! Manages user preferences: the default display currency and date format.
//! Stored as `config.json` under the base directory.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::LedgerResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for the budget tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Preferred display currency code (must exist in the rate table)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults on first run
    pub fn load_or_create(paths: &BudgetPaths) -> LedgerResult<Self> {
        match read_json::<Settings, _>(paths.settings_file())? {
            Some(settings) => Ok(settings),
            None => {
                let settings = Settings::default();
                settings.save(paths)?;
                Ok(settings)
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> LedgerResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}
