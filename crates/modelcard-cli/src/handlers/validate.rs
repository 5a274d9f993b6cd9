//! Validate command handler.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use modelcard_core::ModelRecord;

use crate::error::CliError;
use crate::presentation::{Style, StyleRenderer};
use crate::utils::input::load_records;

/// Outcome of checking a batch of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// One line per record, newline-terminated.
    pub text: String,
    pub total: usize,
    pub invalid: usize,
}

/// Execute the validate command.
///
/// Prints one line per record and fails if any record is invalid.
pub fn execute(input: &Path, renderer: &dyn StyleRenderer) -> Result<(), CliError> {
    let records = load_records(input)?;
    let report = check_records(&records, renderer);

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.text.as_bytes())?;
    stdout.flush()?;

    if report.invalid > 0 {
        tracing::warn!(invalid = report.invalid, total = report.total, "Invalid records");
        return Err(CliError::Invalid(report.invalid, report.total));
    }
    Ok(())
}

/// Check every record for the fields a report needs.
pub fn check_records(records: &[ModelRecord], renderer: &dyn StyleRenderer) -> ValidationReport {
    let mut text = String::new();
    let mut invalid = 0;

    for (i, record) in records.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = match record.missing_field() {
            None => writeln!(
                text,
                "{} {}",
                renderer.paint("ok", &[Style::Green]),
                record.name.as_deref().unwrap_or_default()
            ),
            Some(field) => {
                invalid += 1;
                writeln!(
                    text,
                    "{} {field} in record #{}",
                    renderer.paint("missing", &[Style::Bold]),
                    i + 1
                )
            }
        };
    }

    ValidationReport {
        text,
        total: records.len(),
        invalid,
    }
}
