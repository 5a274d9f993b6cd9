//! Tracing setup for the CLI.
//!
//! Logs go to stderr only; stdout is reserved for reports.
//! Log level is controlled by the `RUST_LOG` environment variable
//! (default: warn, or debug for modelcard crates with `--verbose`).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,modelcard_core=debug,modelcard_cli=debug";

/// Filter directives used when `RUST_LOG` is not set.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn test_verbose_enables_crate_debug() {
        assert!(default_filter(true).contains("modelcard_cli=debug"));
        assert_eq!(default_filter(false), "warn");
    }
}
