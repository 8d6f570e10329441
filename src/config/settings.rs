//! User settings for FinPal
//!
//! Persisted as JSON next to the data file. Missing fields fall back to their
//! defaults so older config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::FinpalPaths;
use crate::error::FinpalError;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used in report output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name of the user data file inside the base directory
    #[serde(default = "default_data_file_name")]
    pub data_file_name: String,

    /// Category suggestions shown when setting budget limits
    #[serde(default = "default_budget_categories")]
    pub budget_categories: Vec<String>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_data_file_name() -> String {
    "userData.txt".to_string()
}

fn default_budget_categories() -> Vec<String> {
    ["Food", "Utilities", "Rent", "Entertainment", "Transportation", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            data_file_name: default_data_file_name(),
            budget_categories: default_budget_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinpalPaths) -> Result<Self, FinpalError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults are not written until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinpalError::Io(format!("Failed to read settings file: {}", e)))?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinpalPaths) -> Result<(), FinpalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinpalError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Write these settings only if no settings file exists yet
    ///
    /// Returns whether a file was written.
    pub fn save_if_missing(&self, paths: &FinpalPaths) -> Result<bool, FinpalError> {
        if paths.settings_file().exists() {
            return Ok(false);
        }
        self.save(paths)?;
        Ok(true)
    }

    /// The category suggestion line shown before setting a limit
    pub fn category_prompt(&self) -> String {
        format!("Available Categories: [{}]", self.budget_categories.join(", "))
    }
}
