//! Commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use std::path::PathBuf;

/// Available commands for modelcard.
///
/// Both commands read a record document: a single record, an array of
/// records, or a `{"models": [...]}` listing.
#[derive(Subcommand)]
pub enum Commands {
    /// Print a report for each model in the input
    Show {
        /// JSON file to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Only print the model with this name (with or without "models/")
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Check that every record carries the fields a report needs
    Validate {
        /// JSON file to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}
