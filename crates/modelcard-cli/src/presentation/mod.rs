//! Shared CLI presentation utilities.
//!
//! This module provides the model report and the styling it is painted
//! with.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Content never embeds escape codes directly; it asks a
//!   [`StyleRenderer`] to paint a [`Style`]

pub mod model_display;
pub mod renderer;
pub mod style;

// Re-export commonly used items
pub use model_display::{
    format_model, format_models, print_model, print_models, print_record, write_model,
};
pub use renderer::{AnsiRenderer, PlainRenderer, StyleRenderer, renderer_for};
pub use style::{BLUE, BOLD, GREEN, RESET, Style};
