//! Diagnostic logging for the forwarder itself.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Build the filter: `RUST_LOG` wins when set, otherwise `level`.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some_and(|value| !value.is_empty()) {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
    } else {
        EnvFilter::new(level.as_filter_str())
    }
}

/// Install a stderr `tracing` subscriber.
///
/// Stdout belongs to the entry point, so nothing is ever logged there.
pub fn init_logging(level: LogLevel) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_uses_level_without_rust_log() {
        // SAFETY: These tests run serially and we restore env vars immediately
        unsafe { std::env::remove_var("RUST_LOG") };
        let filter = build_filter(LogLevel::Debug);
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    #[serial]
    fn test_filter_prefers_rust_log() {
        // SAFETY: These tests run serially and we restore env vars immediately
        unsafe { std::env::set_var("RUST_LOG", "trace") };
        let filter = build_filter(LogLevel::Error);
        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(filter.to_string(), "trace");
    }
}
