//! Logging setup.
//!
//! Console output through `tracing-subscriber`, filtered by `RUST_LOG` when
//! set and by the given default otherwise:
//!
//! ```bash
//! RUST_LOG=reviewcard_core=debug reviewcard-desktop
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "reviewcard=info,reviewcard_core=info";

/// Build the filter: `RUST_LOG` wins, `default_filter` otherwise.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(default_filter: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(DEFAULT_FILTER);
        init("debug");
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert!(filter.to_string().contains("reviewcard_core=info"));
    }
}
