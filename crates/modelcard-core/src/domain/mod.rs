//! Core domain types.
//!
//! These types describe a model as reported by a provider catalog,
//! independent of how the catalog was queried.
//!
//! # Structure
//!
//! - `model` - The validated `ModelDescription`
//! - `record` - The loosely-typed `ModelRecord` and record document parsing

mod model;
mod record;

pub use model::ModelDescription;
pub use record::{ModelListing, ModelRecord, parse_records, read_records};
