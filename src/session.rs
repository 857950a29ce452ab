use log::debug;

use crate::document_scanner::DocumentScanner;
use crate::models::{ExtractedFields, ExtractionResult};
use crate::validation::{CompletenessReport, FormatValidator};

/// Text at or below this many characters (after trimming) is not scanned.
pub const MIN_SCAN_CHARS: usize = 10;

type ExtractCallback<'a> = Box<dyn FnMut(&ExtractedFields) + 'a>;

/// State behind one open "scan document" dialog.
///
/// The result is rebuilt from scratch on every text change and dropped
/// when the dialog closes.
pub struct ScanSession<'a> {
    scanner: &'a DocumentScanner,
    current: Option<ExtractionResult>,
    on_extract: Option<ExtractCallback<'a>>,
}

impl<'a> ScanSession<'a> {
    pub fn new(scanner: &'a DocumentScanner) -> Self {
        Self {
            scanner,
            current: None,
            on_extract: None,
        }
    }

    /// Called with every result that has at least one field.
    pub fn on_extract<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ExtractedFields) + 'a,
    {
        self.on_extract = Some(Box::new(callback));
        self
    }

    pub fn update_text(&mut self, text: &str) -> Option<&ExtractionResult> {
        if text.trim().chars().count() <= MIN_SCAN_CHARS {
            debug!("text too short to scan, clearing result");
            self.current = None;
            return None;
        }

        let result = self.scanner.extract(text);
        if !result.fields.is_empty() {
            if let Some(callback) = self.on_extract.as_mut() {
                callback(&result.fields);
            }
        }
        self.current = Some(result);
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&ExtractionResult> {
        self.current.as_ref()
    }

    /// Completeness of the current result; `None` until something was scanned.
    pub fn report(&self) -> Option<CompletenessReport> {
        self.current
            .as_ref()
            .map(|result| FormatValidator::validate(&result.fields))
    }

    /// Close the dialog, handing back the last result.
    pub fn close(self) -> Option<ExtractionResult> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_clears_result() {
        let scanner = DocumentScanner::new();
        let mut session = ScanSession::new(&scanner);

        assert!(session.update_text("Name: JOHN SMITH").is_some());
        assert!(session.update_text("  Name: JO ").is_none());
        assert!(session.current().is_none());
        assert!(session.report().is_none());
    }

    #[test]
    fn test_result_replaced_on_each_change() {
        let scanner = DocumentScanner::new();
        let mut session = ScanSession::new(&scanner);

        session.update_text("Name: JOHN SMITH\nSex: M");
        assert_eq!(session.current().map(|r| r.field_count), Some(2));

        session.update_text("Name: JOHN SMITH");
        let current = session.current().unwrap();
        assert_eq!(current.field_count, 1);
        assert_eq!(current.fields.sex, None);
    }

    #[test]
    fn test_callback_only_sees_non_empty_results() {
        let scanner = DocumentScanner::new();
        let mut seen = Vec::new();
        {
            let mut session = ScanSession::new(&scanner).on_extract(|fields| {
                seen.push(fields.name.clone());
            });
            session.update_text("nothing useful in this sentence at all");
            session.update_text("Name: MARIA GARCIA");
            let last = session.close();
            assert_eq!(last.map(|r| r.field_count), Some(1));
        }
        assert_eq!(seen, vec![Some("MARIA GARCIA".to_string())]);
    }

    #[test]
    fn test_report_flags_manual_entry() {
        let scanner = DocumentScanner::new();
        let mut session = ScanSession::new(&scanner);
        session.update_text("nothing useful in this sentence at all");
        assert!(session.report().unwrap().needs_manual_entry);
    }
}
