use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::NationalityRules;
use crate::utils::ScanError;

fn default_expiry_warning_days() -> i64 {
    90
}

/// Scanner settings, loaded from a JSON file.
///
/// ```json
/// {
///   "nationalities_file": "nationalities.json",
///   "nationalities": { "KEN": "Kenyan" },
///   "expiry_warning_days": 60
/// }
/// ```
///
/// Inline `nationalities` win over entries from `nationalities_file`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    #[serde(default)]
    pub nationalities_file: Option<PathBuf>,
    #[serde(default)]
    pub nationalities: HashMap<String, String>,
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            nationalities_file: None,
            nationalities: HashMap::new(),
            expiry_warning_days: default_expiry_warning_days(),
        }
    }
}

impl ScannerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let raw = std::fs::read_to_string(path)?;
        let config: ScannerConfig = serde_json::from_str(&raw)?;
        if config.expiry_warning_days < 0 {
            return Err(ScanError::InvalidInput(format!(
                "expiry_warning_days must not be negative, got {}",
                config.expiry_warning_days
            )));
        }
        Ok(config)
    }

    /// Built-in nationality table with the table file and inline overrides applied.
    pub fn nationality_rules(&self) -> Result<NationalityRules, ScanError> {
        let mut rules = match &self.nationalities_file {
            Some(path) => NationalityRules::from_file(path)?,
            None => NationalityRules::new(),
        };
        rules.extend(self.nationalities.clone());
        Ok(rules)
    }
}
