//! Color settings.
//!
//! Whether reports carry ANSI styling is decided from, in order:
//! an explicit mode (command-line flag), `MODELCARD_COLOR`, `NO_COLOR`,
//! and finally `Auto`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// Environment variable holding the preferred color mode.
pub const MODELCARD_COLOR_ENV: &str = "MODELCARD_COLOR";

/// Environment variable that disables color when set to a non-empty value.
/// See <https://no-color.org>.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

impl ColorMode {
    /// Parse a mode from an environment value (case-insensitive).
    pub fn from_env_value(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ModelError::Config(format!(
                "{MODELCARD_COLOR_ENV} must be one of auto, always, never (got '{other}')"
            ))),
        }
    }

    /// Resolve the mode from the process environment.
    pub fn from_env(explicit: Option<Self>) -> Result<Self, ModelError> {
        let color = std::env::var(MODELCARD_COLOR_ENV).ok();
        let no_color = std::env::var(NO_COLOR_ENV).ok();
        resolve_color_mode(explicit, color.as_deref(), no_color.as_deref())
    }

    /// Whether output should be styled given the terminal state of the sink.
    pub const fn should_colorize(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Resolve the effective color mode from already-read inputs.
///
/// An empty `MODELCARD_COLOR` is treated as unset, as is an empty `NO_COLOR`.
pub fn resolve_color_mode(
    explicit: Option<ColorMode>,
    modelcard_color: Option<&str>,
    no_color: Option<&str>,
) -> Result<ColorMode, ModelError> {
    if let Some(mode) = explicit {
        return Ok(mode);
    }

    if let Some(value) = modelcard_color.filter(|v| !v.trim().is_empty()) {
        let mode = ColorMode::from_env_value(value)?;
        tracing::debug!(%mode, "Color mode from {MODELCARD_COLOR_ENV}");
        return Ok(mode);
    }

    if no_color.is_some_and(|v| !v.is_empty()) {
        tracing::debug!("Color disabled by {NO_COLOR_ENV}");
        return Ok(ColorMode::Never);
    }

    Ok(ColorMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_mode_wins() {
        let mode = resolve_color_mode(Some(ColorMode::Always), Some("never"), Some("1")).unwrap();
        assert_eq!(mode, ColorMode::Always);
    }

    #[test]
    fn test_env_value_beats_no_color() {
        let mode = resolve_color_mode(None, Some("ALWAYS"), Some("1")).unwrap();
        assert_eq!(mode, ColorMode::Always);
    }

    #[test]
    fn test_no_color_disables() {
        assert_eq!(
            resolve_color_mode(None, None, Some("1")).unwrap(),
            ColorMode::Never
        );
        assert_eq!(
            resolve_color_mode(None, Some("  "), Some("yes")).unwrap(),
            ColorMode::Never
        );
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        assert_eq!(
            resolve_color_mode(None, None, Some("")).unwrap(),
            ColorMode::Auto
        );
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(resolve_color_mode(None, None, None).unwrap(), ColorMode::Auto);
    }

    #[test]
    fn test_invalid_env_value() {
        let err = resolve_color_mode(None, Some("rainbow"), None).unwrap_err();
        assert!(matches!(err, ModelError::Config(msg) if msg.contains("rainbow")));
    }

    #[test]
    fn test_should_colorize() {
        assert!(ColorMode::Auto.should_colorize(true));
        assert!(!ColorMode::Auto.should_colorize(false));
        assert!(ColorMode::Always.should_colorize(false));
        assert!(!ColorMode::Never.should_colorize(true));
    }

    #[test]
    fn test_display_round_trips_env_value() {
        for mode in [ColorMode::Auto, ColorMode::Always, ColorMode::Never] {
            assert_eq!(ColorMode::from_env_value(&mode.to_string()).unwrap(), mode);
        }
    }
}
