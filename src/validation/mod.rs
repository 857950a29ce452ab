pub mod expiry;
pub mod format;

pub use expiry::{parse_document_date, ExpiryStatus, ExpiryValidator};
pub use format::{CompletenessReport, FormatValidator};
