//! Logging setup for binaries embedding the overlay.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the application. Filtering follows `RUST_LOG`, falling back to
//! the level passed in.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_log_level() -> &'static str {
    "info"
}

/// Build the env filter, preferring `RUST_LOG` over `fallback`
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a stderr subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(fallback: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(stdout_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_second_init_fails() {
        // Only one global subscriber may exist per process
        let _ = init_logging("debug");
        assert!(init_logging("debug").is_err());
    }
}
