pub mod data;
pub mod rules;

pub use data::{DateCandidate, DateRole, ExtractedFields, ExtractionResult, FieldKind};
pub use rules::NationalityRules;
