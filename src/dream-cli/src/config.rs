//! Startup configuration read from the environment.

use std::ffi::OsString;

/// Program the forwarder delegates to when nothing else is configured.
pub const DEFAULT_ENTRY_POINT: &str = "invokeai";

/// Overrides the delegated program (name on `PATH` or a path).
pub const ENTRY_POINT_ENV: &str = "DREAM_ENTRY_POINT";

/// Log level for the forwarder's own diagnostics.
pub const LOG_LEVEL_ENV: &str = "DREAM_LOG_LEVEL";

/// Log level for the forwarder's diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Forwarder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// Program to delegate to.
    pub entry_point: OsString,
    /// Level for the forwarder's own logs.
    pub log_level: LogLevel,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            entry_point: OsString::from(DEFAULT_ENTRY_POINT),
            log_level: LogLevel::default(),
        }
    }
}

impl ForwarderConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Load configuration through `lookup`. Empty or unknown values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();

        if let Some(entry_point) = lookup(ENTRY_POINT_ENV)
            && !entry_point.is_empty()
        {
            config.entry_point = entry_point;
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV)
            .as_deref()
            .and_then(|value| value.to_str())
            .and_then(LogLevel::from_str_loose)
        {
            config.log_level = level;
        }

        config
    }
}
