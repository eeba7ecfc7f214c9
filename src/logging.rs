//! Tracing/logging initialization.
//!
//! Events go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Build the event filter
///
/// `verbose` forces `debug` for this crate; otherwise `RUST_LOG` wins and
/// falls back to [`DEFAULT_FILTER`].
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("cost_estimator=debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_noop() {
        init(false);
        init(true);
    }
}
