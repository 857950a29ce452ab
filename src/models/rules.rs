use std::collections::HashMap;
use std::path::Path;

use crate::utils::ScanError;

/// Maps country codes and demonyms to the display value used on HR records.
#[derive(Debug, Clone)]
pub struct NationalityRules {
    entries: HashMap<String, String>,
}

// (code or demonym, display value)
const BUILTIN_NATIONALITIES: &[(&str, &str)] = &[
    ("USA", "American"),
    ("US", "American"),
    ("AMERICAN", "American"),
    ("GBR", "British"),
    ("UK", "British"),
    ("BRITISH", "British"),
    ("CAN", "Canadian"),
    ("CANADIAN", "Canadian"),
    ("AUS", "Australian"),
    ("AUSTRALIAN", "Australian"),
    ("IND", "Indian"),
    ("INDIAN", "Indian"),
    ("PAK", "Pakistani"),
    ("PAKISTANI", "Pakistani"),
    ("BGD", "Bangladeshi"),
    ("BANGLADESHI", "Bangladeshi"),
    ("NPL", "Nepali"),
    ("NEPALI", "Nepali"),
    ("NEPALESE", "Nepali"),
    ("LKA", "Sri Lankan"),
    ("SRI LANKAN", "Sri Lankan"),
    ("PHL", "Filipino"),
    ("FILIPINO", "Filipino"),
    ("EGY", "Egyptian"),
    ("EGYPTIAN", "Egyptian"),
    ("ARE", "Emirati"),
    ("UAE", "Emirati"),
    ("EMIRATI", "Emirati"),
    ("SAU", "Saudi"),
    ("SAUDI", "Saudi"),
    ("QAT", "Qatari"),
    ("QATARI", "Qatari"),
    ("JOR", "Jordanian"),
    ("JORDANIAN", "Jordanian"),
    ("LBN", "Lebanese"),
    ("LEBANESE", "Lebanese"),
    ("FRA", "French"),
    ("FRENCH", "French"),
    ("DEU", "German"),
    ("GER", "German"),
    ("GERMAN", "German"),
    ("ESP", "Spanish"),
    ("SPANISH", "Spanish"),
    ("ITA", "Italian"),
    ("ITALIAN", "Italian"),
    ("CHN", "Chinese"),
    ("CHINESE", "Chinese"),
    ("JPN", "Japanese"),
    ("JAPANESE", "Japanese"),
    ("KEN", "Kenyan"),
    ("KENYAN", "Kenyan"),
    ("NGA", "Nigerian"),
    ("NIGERIAN", "Nigerian"),
    ("ZAF", "South African"),
    ("SOUTH AFRICAN", "South African"),
];

impl NationalityRules {
    pub fn new() -> Self {
        let entries = BUILTIN_NATIONALITIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or replace mappings. Keys are matched case-insensitively.
    pub fn extend<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (code, name) in overrides {
            self.entries.insert(Self::key(&code), name);
        }
    }

    /// Built-in table extended with a JSON object of `{"CODE": "Display"}` pairs.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let raw = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw)?;
        let mut rules = Self::new();
        rules.extend(overrides);
        Ok(rules)
    }

    /// Canonical display value, or the trimmed input when unmapped.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.entries.get(&Self::key(trimmed)) {
            Some(name) => name.clone(),
            None => trimmed.to_string(),
        }
    }

    fn key(raw: &str) -> String {
        raw.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    }
}

impl Default for NationalityRules {
    fn default() -> Self {
        Self::new()
    }
}
