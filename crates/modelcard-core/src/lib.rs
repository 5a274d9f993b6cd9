//! Core domain types for modelcard.
//!
//! This crate holds the model description types, the record parsing that
//! turns catalog JSON into those types, and the color settings shared by
//! every adapter. It performs no terminal I/O.
//!
//! # Structure
//!
//! - [`domain`] - `ModelDescription`, `ModelRecord` and record documents
//! - [`error`] - `ModelError`, the single error type of this crate
//! - [`settings`] - `ColorMode` and its environment resolution

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{ModelDescription, ModelListing, ModelRecord, parse_records, read_records};
pub use error::ModelError;
pub use settings::{ColorMode, MODELCARD_COLOR_ENV, NO_COLOR_ENV, resolve_color_mode};

// Silence unused dev-dependency warnings for the unit test build
#[cfg(test)]
use tempfile as _;
