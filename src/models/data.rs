use serde::{Deserialize, Serialize};
use std::fmt;

/// Best-effort bag of fields recovered from free text.
/// Every field is optional; absence means "not found", never a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

impl ExtractedFields {
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        let value = match kind {
            FieldKind::PassportNumber => &self.passport_number,
            FieldKind::Name => &self.name,
            FieldKind::Nationality => &self.nationality,
            FieldKind::DateOfBirth => &self.date_of_birth,
            FieldKind::IssueDate => &self.issue_date,
            FieldKind::ExpiryDate => &self.expiry_date,
            FieldKind::PlaceOfBirth => &self.place_of_birth,
            FieldKind::Sex => &self.sex,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Number of fields holding a non-empty value.
    pub fn populated_count(&self) -> usize {
        FieldKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    pub(crate) fn date_slot_mut(&mut self, role: DateRole) -> &mut Option<String> {
        match role {
            DateRole::Birth => &mut self.date_of_birth,
            DateRole::Issue => &mut self.issue_date,
            DateRole::Expiry => &mut self.expiry_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    PassportNumber,
    Name,
    Nationality,
    DateOfBirth,
    IssueDate,
    ExpiryDate,
    PlaceOfBirth,
    Sex,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::PassportNumber,
        FieldKind::Name,
        FieldKind::Nationality,
        FieldKind::DateOfBirth,
        FieldKind::IssueDate,
        FieldKind::ExpiryDate,
        FieldKind::PlaceOfBirth,
        FieldKind::Sex,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::PassportNumber => "Passport Number",
            FieldKind::Name => "Name",
            FieldKind::Nationality => "Nationality",
            FieldKind::DateOfBirth => "Date of Birth",
            FieldKind::IssueDate => "Date of Issue",
            FieldKind::ExpiryDate => "Date of Expiry",
            FieldKind::PlaceOfBirth => "Place of Birth",
            FieldKind::Sex => "Sex",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the extractor hands back to its caller: the record plus how many
/// fields it managed to fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub fields: ExtractedFields,
    pub field_count: usize,
}

impl ExtractionResult {
    pub fn new(fields: ExtractedFields) -> Self {
        let field_count = fields.populated_count();
        Self { fields, field_count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRole {
    Birth,
    Issue,
    Expiry,
}

impl DateRole {
    /// Order used when unclassified dates are assigned by position.
    pub const FALLBACK_ORDER: [DateRole; 3] = [DateRole::Birth, DateRole::Issue, DateRole::Expiry];
}

/// One date-shaped substring found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub role: Option<DateRole>,
}
