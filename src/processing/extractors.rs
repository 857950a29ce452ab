// Field-specific extraction functions over the ordered pattern tables
use log::{debug, trace};

use crate::processing::patterns::{
    accept_name, FieldPattern, GIVEN_NAME_PATTERNS, NAME_PATTERNS, NATIONALITY_PATTERNS,
    PASSPORT_NUMBER_PATTERNS, PLACE_OF_BIRTH_PATTERNS, SEX_PATTERNS, SURNAME_PATTERNS,
    UNLABELLED_NAME_PATTERNS,
};

/// Walk `patterns` in priority order and return the first capture its
/// validator accepts. Matches of a single pattern are tried in text order.
pub fn first_match(field: &str, patterns: &[FieldPattern], text: &str) -> Option<String> {
    for pattern in patterns {
        for captures in pattern.regex.captures_iter(text) {
            let Some(matched) = captures.get(1) else {
                continue;
            };
            match (pattern.accept)(matched.as_str()) {
                Some(value) => {
                    debug!("{} matched by '{}': {}", field, pattern.label, value);
                    return Some(value);
                }
                None => trace!(
                    "{} candidate '{}' rejected by '{}'",
                    field,
                    matched.as_str().trim(),
                    pattern.label
                ),
            }
        }
    }
    None
}

pub struct FieldMatcher;

impl FieldMatcher {
    pub fn extract_passport_number_from_text(text: &str) -> Option<String> {
        first_match("passport number", &PASSPORT_NUMBER_PATTERNS, text)
    }

    /// Labelled name first, then a surname/given-names pair, then an
    /// unlabelled upper-case line.
    pub fn extract_name_from_text(text: &str) -> Option<String> {
        if let Some(name) = first_match("name", &NAME_PATTERNS, text) {
            return Some(name);
        }
        if let Some(name) = Self::extract_split_name_from_text(text) {
            return Some(name);
        }
        first_match("name", &UNLABELLED_NAME_PATTERNS, text)
    }

    /// "Surname: SMITH" + "Given names: JOHN" reads as "JOHN SMITH".
    pub fn extract_split_name_from_text(text: &str) -> Option<String> {
        let surname = first_match("surname", &SURNAME_PATTERNS, text)?;
        match first_match("given names", &GIVEN_NAME_PATTERNS, text) {
            Some(given) => accept_name(&format!("{} {}", given, surname)),
            None => accept_name(&surname),
        }
    }

    /// Raw nationality token; normalization happens in the scanner.
    pub fn extract_nationality_from_text(text: &str) -> Option<String> {
        first_match("nationality", &NATIONALITY_PATTERNS, text)
    }

    pub fn extract_place_of_birth_from_text(text: &str) -> Option<String> {
        first_match("place of birth", &PLACE_OF_BIRTH_PATTERNS, text)
    }

    pub fn extract_sex_from_text(text: &str) -> Option<String> {
        first_match("sex", &SEX_PATTERNS, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_passport_number() {
        let text = "Passport No: 123456789";
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text(text),
            Some("123456789".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Document No: ab-123-4567"),
            Some("AB1234567".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Document Number: ab-123 4567"),
            Some("AB1234567".to_string())
        );
    }

    #[test]
    fn test_passport_number_outside_length_bounds_is_not_captured() {
        assert_eq!(FieldMatcher::extract_passport_number_from_text("Passport No: 12345"), None);
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Passport No: 1234567890123"),
            None
        );
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Passport No: 123456"),
            Some("123456".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Passport No: 123456789012"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn test_later_pattern_used_when_labelled_value_rejected() {
        let text = "Passport No: 1234\nref N1234567 on file";
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text(text),
            Some("N1234567".to_string())
        );
    }

    #[test]
    fn test_name_strategies_in_order() {
        assert_eq!(
            FieldMatcher::extract_name_from_text("Name: JOHN SMITH"),
            Some("JOHN SMITH".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_name_from_text("Surname: SMITH\nGiven Names: JOHN PAUL"),
            Some("JOHN PAUL SMITH".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_name_from_text("UNITED KINGDOM\nPASSPORT\nJANE DOE\n"),
            Some("JANE DOE".to_string())
        );
    }

    #[test]
    fn test_passport_number_with_inner_space() {
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Passport No: A 1234567"),
            Some("A1234567".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_passport_number_from_text("Passport No: 123456789 Date of Issue"),
            Some("123456789".to_string())
        );
    }

    #[test]
    fn test_split_name_labels_are_combined() {
        assert_eq!(
            FieldMatcher::extract_name_from_text("Surname: SMITH\nGiven Name: JOHN PAUL"),
            Some("JOHN PAUL SMITH".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_name_from_text("Family Name: VAN DER BERG\nGiven Names: ANNA"),
            Some("ANNA VAN DER BERG".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_name_from_text("First Name: JOHN PAUL\nLast Name: SMITH"),
            Some("JOHN PAUL SMITH".to_string())
        );
        assert_eq!(
            FieldMatcher::extract_name_from_text("Last Name: GARCIA\nFirst Name: MARIA"),
            Some("MARIA GARCIA".to_string())
        );
    }

    #[test]
    fn test_unlabelled_accented_name() {
        assert_eq!(
            FieldMatcher::extract_name_from_text("REPUBLIQUE FRANCAISE\nJOSÉ GARCÍA\n"),
            Some("JOSÉ GARCÍA".to_string())
        );
    }

    #[test]
    fn test_surname_is_not_read_as_name_label() {
        // "Surname:" alone gives a single token, which is not a full name
        assert_eq!(FieldMatcher::extract_name_from_text("Surname: SMITH"), None);
    }

    #[test]
    fn test_sex_and_place_of_birth() {
        let text = "Sex: F\nPlace of Birth: NAIROBI, KENYA";
        assert_eq!(FieldMatcher::extract_sex_from_text(text), Some("F".to_string()));
        assert_eq!(
            FieldMatcher::extract_place_of_birth_from_text(text),
            Some("NAIROBI, KENYA".to_string())
        );
    }

    #[test]
    fn test_nationality_raw_token() {
        assert_eq!(
            FieldMatcher::extract_nationality_from_text("Nationality: AMERICAN"),
            Some("AMERICAN".to_string())
        );
        assert_eq!(FieldMatcher::extract_nationality_from_text("Nat: USA"), Some("USA".to_string()));
    }
}
