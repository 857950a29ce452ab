pub mod config;
pub mod document_scanner;
pub mod models;
pub mod processing;
pub mod session;
pub mod utils;
pub mod validation;

pub use config::ScannerConfig;
pub use document_scanner::DocumentScanner;
pub use session::ScanSession;
