//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Load records from the input
//!   2. Convert them through `modelcard-core`
//!   3. Hand the result to `presentation` for output
//!
//! Handlers should NOT embed escape codes or format reports themselves.

pub mod show;
pub mod validate;
