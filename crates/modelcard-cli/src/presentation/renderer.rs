//! Style renderers.
//!
//! The report formatter describes emphasis with [`Style`] tokens and lets a
//! renderer decide what they look like. Swapping the renderer is all it
//! takes to send the same report to a terminal, a log file or a pipe.

use modelcard_core::ColorMode;

use super::style::{RESET, Style};

/// Paints text segments with a set of styles.
pub trait StyleRenderer {
    /// Return `text` with `styles` applied.
    fn paint(&self, text: &str, styles: &[Style]) -> String;
}

/// Renders styles as ANSI escape sequences followed by a reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl StyleRenderer for AnsiRenderer {
    fn paint(&self, text: &str, styles: &[Style]) -> String {
        if styles.is_empty() {
            return text.to_string();
        }

        let mut painted = String::with_capacity(text.len() + styles.len() * 5 + RESET.len());
        for style in styles {
            painted.push_str(style.ansi_code());
        }
        painted.push_str(text);
        painted.push_str(RESET);
        painted
    }
}

/// Drops all styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl StyleRenderer for PlainRenderer {
    fn paint(&self, text: &str, _styles: &[Style]) -> String {
        text.to_string()
    }
}

/// Pick a renderer for a color mode and output sink.
pub fn renderer_for(mode: ColorMode, is_terminal: bool) -> Box<dyn StyleRenderer> {
    if mode.should_colorize(is_terminal) {
        tracing::debug!(%mode, is_terminal, "Using ANSI renderer");
        Box::new(AnsiRenderer)
    } else {
        tracing::debug!(%mode, is_terminal, "Using plain renderer");
        Box::new(PlainRenderer)
    }
}
