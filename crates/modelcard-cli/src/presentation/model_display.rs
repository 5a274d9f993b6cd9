//! Model report display utilities for CLI output.
//!
//! A report is always four lines:
//!
//! ```text
//! models/demo-1 (Demo Model)
//!     A test model.
//!     Max input tokens: 8192
//!     Max output tokens: 2048
//! ```
//!
//! Reports are formatted in full before anything is written, so a caller
//! never sees half a report.

use std::fmt::Write as _;
use std::io::{self, Write};

use modelcard_core::{ModelDescription, ModelRecord};

use super::renderer::{AnsiRenderer, StyleRenderer};
use super::style::Style;
use crate::error::CliError;

const INDENT: &str = "    ";

/// Format a model report.
pub fn format_model(model: &ModelDescription, renderer: &dyn StyleRenderer) -> String {
    let mut out = String::new();
    push_report(&mut out, model, renderer);
    out
}

/// Format several reports separated by a blank line.
pub fn format_models(models: &[ModelDescription], renderer: &dyn StyleRenderer) -> String {
    let mut out = String::new();
    for (i, model) in models.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_report(&mut out, model, renderer);
    }
    out
}

fn push_report(out: &mut String, model: &ModelDescription, renderer: &dyn StyleRenderer) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{} ({})",
        renderer.paint(&model.name, &[Style::Bold, Style::Blue]),
        model.display_name
    );
    let _ = writeln!(
        out,
        "{INDENT}{}",
        renderer.paint(&model.description, &[Style::Green])
    );
    let _ = writeln!(
        out,
        "{INDENT}{} {}",
        renderer.paint("Max input tokens:", &[Style::Bold]),
        model.input_token_limit
    );
    let _ = writeln!(
        out,
        "{INDENT}{} {}",
        renderer.paint("Max output tokens:", &[Style::Bold]),
        model.output_token_limit
    );
}

/// Write a model report to `writer` in a single write.
pub fn write_model<W: Write>(
    writer: &mut W,
    model: &ModelDescription,
    renderer: &dyn StyleRenderer,
) -> io::Result<()> {
    writer.write_all(format_model(model, renderer).as_bytes())?;
    writer.flush()
}

/// Print a model report to stdout with ANSI styling.
///
/// # Examples
///
/// ```rust,no_run
/// use modelcard_cli::presentation::print_model;
/// use modelcard_core::ModelDescription;
///
/// let model = ModelDescription::new("models/demo-1", "Demo Model", "A test model.", 8192, 2048);
/// print_model(&model)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn print_model(model: &ModelDescription) -> io::Result<()> {
    write_model(&mut io::stdout().lock(), model, &AnsiRenderer)
}

/// Print several model reports to stdout in a single write.
pub fn print_models(models: &[ModelDescription], renderer: &dyn StyleRenderer) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_models(models, renderer).as_bytes())?;
    stdout.flush()
}

/// Convert a catalog record and print its report.
///
/// A record with a missing field fails before anything is written.
pub fn print_record(record: &ModelRecord) -> Result<(), CliError> {
    let model = ModelDescription::try_from(record.clone())?;
    print_model(&model)?;
    Ok(())
}
