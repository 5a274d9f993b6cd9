//! CLI adapter for modelcard.
//!
//! Reads model records, converts them through `modelcard-core` and prints
//! the four-line model report.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the unit test build
#[cfg(test)]
use tempfile as _;

// dotenvy is only used by the binary
use dotenvy as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod utils;

use std::io::IsTerminal;

use clap::CommandFactory;
use modelcard_core::ColorMode;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::{Cli, ColorArg};
pub use presentation::print_model;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mode = ColorMode::from_env(cli.color.map(ColorMode::from))?;
    let renderer = presentation::renderer_for(mode, std::io::stdout().is_terminal());

    match command {
        Commands::Show { input, name } => {
            handlers::show::execute(&input, name.as_deref(), renderer.as_ref())
        }
        Commands::Validate { input } => handlers::validate::execute(&input, renderer.as_ref()),
    }
}
