//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::{Parser, ValueEnum};
use modelcard_core::ColorMode;

use crate::commands::Commands;

/// Command-line interface definition for modelcard.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "modelcard")]
#[command(about = "Print model descriptions from a provider catalog")]
#[command(version)]
pub struct Cli {
    /// When to style output (overrides MODELCARD_COLOR and NO_COLOR)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorArg>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values accepted by `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
