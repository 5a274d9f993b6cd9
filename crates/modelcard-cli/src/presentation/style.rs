//! Style tokens and their ANSI escape sequences.

// ANSI color codes
pub const BOLD: &str = "\x1b[1m";
pub const BLUE: &str = "\x1b[34m";
pub const GREEN: &str = "\x1b[32m";
pub const RESET: &str = "\x1b[0m";

/// A unit of emphasis applied to a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    /// Accent for model identifiers.
    Blue,
    /// Accent for descriptive text.
    Green,
}

impl Style {
    /// ANSI escape sequence that turns this style on.
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Bold => BOLD,
            Self::Blue => BLUE,
            Self::Green => GREEN,
        }
    }
}
