use crate::models::{ExtractedFields, FieldKind};

/// Which fields the scan produced and which still need typing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    pub found: Vec<FieldKind>,
    pub missing: Vec<FieldKind>,
    pub needs_manual_entry: bool,
}

pub struct FormatValidator;

impl FormatValidator {
    pub fn validate(fields: &ExtractedFields) -> CompletenessReport {
        let (found, missing): (Vec<FieldKind>, Vec<FieldKind>) = FieldKind::ALL
            .iter()
            .copied()
            .partition(|kind| fields.get(*kind).is_some());

        CompletenessReport {
            needs_manual_entry: fields.is_empty(),
            found,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scan_needs_manual_entry() {
        let report = FormatValidator::validate(&ExtractedFields::default());
        assert!(report.needs_manual_entry);
        assert!(report.found.is_empty());
        assert_eq!(report.missing.len(), FieldKind::ALL.len());
    }

    #[test]
    fn test_partial_scan_lists_missing_fields() {
        let fields = ExtractedFields {
            name: Some("JOHN SMITH".to_string()),
            expiry_date: Some("01/01/2030".to_string()),
            ..Default::default()
        };
        let report = FormatValidator::validate(&fields);
        assert!(!report.needs_manual_entry);
        assert_eq!(report.found, vec![FieldKind::Name, FieldKind::ExpiryDate]);
        assert!(report.missing.contains(&FieldKind::PassportNumber));
        assert!(!report.missing.contains(&FieldKind::Name));
    }
}
