//! The deprecation notice shown on every run.

/// Entry points that replace `dream`.
pub const REPLACEMENT_ENTRY_POINTS: [&str; 2] = ["invoke.py", "legacy_api.py"];

/// Fixed deprecation message. Must name every entry in [`REPLACEMENT_ENTRY_POINTS`].
pub const DEPRECATION_NOTICE: &str = "dream is being deprecated, please run invoke.py for the \
                                      new UI/API or legacy_api.py for the old API";

/// Returns the deprecation notice.
pub fn deprecation_notice() -> &'static str {
    DEPRECATION_NOTICE
}
