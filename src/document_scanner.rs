use log::info;

use crate::config::ScannerConfig;
use crate::models::{ExtractedFields, ExtractionResult, NationalityRules};
use crate::processing::{DateDisambiguator, FieldMatcher};
use crate::utils::ScanError;

/// Runs every field extractor over a piece of transcribed document text.
///
/// Extraction is pure: the scanner holds only the read-only nationality
/// table, so one instance can be shared between dialogs and threads.
pub struct DocumentScanner {
    nationalities: NationalityRules,
}

impl DocumentScanner {
    pub fn new() -> Self {
        Self {
            nationalities: NationalityRules::new(),
        }
    }

    pub fn with_nationalities(nationalities: NationalityRules) -> Self {
        Self { nationalities }
    }

    pub fn from_config(config: &ScannerConfig) -> Result<Self, ScanError> {
        Ok(Self::with_nationalities(config.nationality_rules()?))
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut fields = ExtractedFields {
            passport_number: FieldMatcher::extract_passport_number_from_text(text),
            name: FieldMatcher::extract_name_from_text(text),
            nationality: FieldMatcher::extract_nationality_from_text(text)
                .map(|raw| self.nationalities.normalize(&raw)),
            place_of_birth: FieldMatcher::extract_place_of_birth_from_text(text),
            sex: FieldMatcher::extract_sex_from_text(text),
            ..Default::default()
        };
        DateDisambiguator::assign_dates(text, &mut fields);

        let result = ExtractionResult::new(fields);
        info!("extracted {} field(s) from {} chars", result.field_count, text.chars().count());
        result
    }
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "PASSPORT\nName: JOHN SMITH\nPassport No: 123456789\nDate of Birth: 15/03/1985\nNationality: AMERICAN";

    #[test]
    fn test_labelled_passport_page() {
        let result = DocumentScanner::new().extract(SAMPLE);
        let expected = ExtractedFields {
            name: Some("JOHN SMITH".to_string()),
            passport_number: Some("123456789".to_string()),
            date_of_birth: Some("15/03/1985".to_string()),
            nationality: Some("American".to_string()),
            ..Default::default()
        };
        assert_eq!(result.fields, expected);
        assert_eq!(result.field_count, 4);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let scanner = DocumentScanner::new();
        let first = scanner.extract(SAMPLE);
        let second = scanner.extract(SAMPLE);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.fields).unwrap(),
            serde_json::to_string(&second.fields).unwrap()
        );
    }

    #[test]
    fn test_unlabelled_dates_assigned_by_position() {
        let result = DocumentScanner::new().extract("Reference 12/05/1990 and 01/02/2015 on file");
        assert_eq!(result.fields.date_of_birth.as_deref(), Some("12/05/1990"));
        assert_eq!(result.fields.issue_date.as_deref(), Some("01/02/2015"));
        assert_eq!(result.fields.expiry_date, None);
    }

    #[test]
    fn test_prose_yields_no_fields() {
        let result = DocumentScanner::new()
            .extract("the quick brown fox jumps over the lazy dog while everyone watches");
        assert_eq!(result.fields, ExtractedFields::default());
        assert_eq!(result.field_count, 0);
    }

    #[test]
    fn test_absent_fields_are_none() {
        let result = DocumentScanner::new().extract("Name: JANE DOE\nSex: F");
        assert_eq!(result.fields.name.as_deref(), Some("JANE DOE"));
        assert_eq!(result.fields.sex.as_deref(), Some("F"));
        assert_eq!(result.fields.date_of_birth, None);
        assert_eq!(result.fields.issue_date, None);
        assert_eq!(result.fields.expiry_date, None);
        assert_eq!(result.fields.passport_number, None);
        assert_eq!(result.field_count, 2);
    }

    #[test]
    fn test_full_data_page() {
        let text = "REPUBLIC OF KENYA\nPASSPORT\nSurname: OTIENO\nGiven Names: GRACE AKINYI\n\
                    Passport Number: AK0123456\nNationality: KEN\nSex: F\n\
                    Place of Birth: KISUMU\nDate of Birth: 02 Feb 1990\n\
                    Date of Issue: 10/01/2018\nDate of Expiry: 09/01/2028";
        let fields = DocumentScanner::new().extract(text).fields;
        assert_eq!(fields.name.as_deref(), Some("GRACE AKINYI OTIENO"));
        assert_eq!(fields.passport_number.as_deref(), Some("AK0123456"));
        assert_eq!(fields.nationality.as_deref(), Some("Kenyan"));
        assert_eq!(fields.sex.as_deref(), Some("F"));
        assert_eq!(fields.place_of_birth.as_deref(), Some("KISUMU"));
        assert_eq!(fields.date_of_birth.as_deref(), Some("02 Feb 1990"));
        assert_eq!(fields.issue_date.as_deref(), Some("10/01/2018"));
        assert_eq!(fields.expiry_date.as_deref(), Some("09/01/2028"));
        assert_eq!(fields.populated_count(), 8);
    }

    #[test]
    fn test_custom_nationality_table() {
        let mut rules = NationalityRules::new();
        rules.extend([("AMERICAN".to_string(), "United States".to_string())]);
        let result = DocumentScanner::with_nationalities(rules).extract(SAMPLE);
        assert_eq!(result.fields.nationality.as_deref(), Some("United States"));
    }

    #[test]
    fn test_scanner_built_from_config_file_table() {
        use std::io::Write;

        let mut table = tempfile::NamedTempFile::new().unwrap();
        write!(table, r#"{{"AMERICAN": "US citizen"}}"#).unwrap();
        let config = ScannerConfig {
            nationalities_file: Some(table.path().to_path_buf()),
            ..Default::default()
        };

        let result = DocumentScanner::from_config(&config).unwrap().extract(SAMPLE);
        assert_eq!(result.fields.nationality.as_deref(), Some("US citizen"));
    }

    #[test]
    fn test_scanner_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentScanner>();
    }
}
