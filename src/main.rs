// Scan transcribed passport / permit text and report the fields found

use std::io::Read;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use fieldscan::{
    models::{ExtractionResult, FieldKind},
    utils::ScanError,
    validation::{expiry::parse_reference_date, ExpiryStatus, ExpiryValidator, FormatValidator},
    DocumentScanner, ScannerConfig,
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "fieldscan", about = "Extract passport fields from transcribed document text")]
struct Args {
    /// Text file to scan; reads stdin when omitted
    input: Option<PathBuf>,

    /// Print the extracted fields and field count as JSON
    #[arg(long)]
    json: bool,

    /// JSON config file (nationality overrides, expiry warning window)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference date for the expiry check, YYYY-MM-DD
    #[arg(long)]
    today: Option<String>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String, ScanError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_detailed_report(result: &ExtractionResult, expiry: ExpiryStatus) {
    println!("\n===============================================");
    println!("        DOCUMENT SCAN REPORT");
    println!("===============================================\n");

    println!("EXTRACTED FIELDS ({}):", result.field_count);
    for kind in FieldKind::ALL {
        println!("  {:<16} {}", format!("{}:", kind), result.fields.get(kind).unwrap_or("-"));
    }

    let report = FormatValidator::validate(&result.fields);
    if report.needs_manual_entry {
        println!("\nNo fields could be extracted; enter the details manually.");
    } else if !report.missing.is_empty() {
        println!("\nMISSING FIELDS:");
        for kind in &report.missing {
            println!("  - {}", kind);
        }
    }

    println!(
        "\nDocument expiry: {}",
        match expiry {
            ExpiryStatus::Valid { days_remaining } => format!("VALID ({} days remaining)", days_remaining),
            ExpiryStatus::ExpiringSoon { days_remaining } => {
                format!("EXPIRING SOON ({} days remaining)", days_remaining)
            }
            ExpiryStatus::Expired { days_overdue } => format!("EXPIRED ({} days ago)", days_overdue),
            ExpiryStatus::Unknown => "UNKNOWN".to_string(),
        }
    );
}

fn main() -> Result<(), ScanError> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("loading config from {:?}", path);
            ScannerConfig::from_file(path)?
        }
        None => ScannerConfig::default(),
    };
    let today = match &args.today {
        Some(raw) => parse_reference_date(raw)?,
        None => Local::now().naive_local().date(),
    };

    let text = read_input(args.input.as_ref())?;
    let result = DocumentScanner::from_config(&config)?.extract(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let expiry = ExpiryValidator::check(&result.fields, today, config.expiry_warning_days);
        print_detailed_report(&result, expiry);
    }

    Ok(())
}
