use chrono::NaiveDate;
use log::debug;

use crate::models::ExtractedFields;
use crate::utils::ScanError;

// Day-first, as printed on most passports and permits
const FOUR_DIGIT_YEAR_FORMATS: &[&str] = &[
    "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y", "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d",
    // %B takes both "Mar" and "March"
    "%d %B %Y", "%d-%B-%Y", "%d/%B/%Y", "%d %B, %Y", "%B %d, %Y", "%B %d %Y",
];
const TWO_DIGIT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d.%m.%y", "%d-%m-%y"];

/// Interpret an extracted date string. Extraction never parses dates, so
/// this is where calendar meaning gets attached.
pub fn parse_document_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    // "Mar." -> "Mar"
    let cleaned = cleaned.replace(". ", " ");

    let has_full_year = cleaned
        .split(|c: char| !c.is_ascii_digit())
        .any(|part| part.len() == 4);
    let formats = if has_full_year {
        FOUR_DIGIT_YEAR_FORMATS
    } else {
        TWO_DIGIT_YEAR_FORMATS
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

/// Parse a `YYYY-MM-DD` reference date as given on the command line.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, ScanError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| ScanError::InvalidDate(format!("{}: {}", raw, e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Valid { days_remaining: i64 },
    ExpiringSoon { days_remaining: i64 },
    Expired { days_overdue: i64 },
    /// No expiry date, or one that could not be read as a calendar date.
    Unknown,
}

pub struct ExpiryValidator;

impl ExpiryValidator {
    pub fn check(fields: &ExtractedFields, today: NaiveDate, warn_days: i64) -> ExpiryStatus {
        let Some(raw) = fields.expiry_date.as_deref() else {
            return ExpiryStatus::Unknown;
        };
        let Some(expiry) = parse_document_date(raw) else {
            debug!("expiry date '{}' is not a recognised calendar date", raw);
            return ExpiryStatus::Unknown;
        };

        let days = (expiry - today).num_days();
        if days < 0 {
            ExpiryStatus::Expired { days_overdue: -days }
        } else if days <= warn_days {
            ExpiryStatus::ExpiringSoon { days_remaining: days }
        } else {
            ExpiryStatus::Valid { days_remaining: days }
        }
    }
}
