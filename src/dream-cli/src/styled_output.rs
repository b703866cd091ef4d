//! Styled stderr lines for the forwarder's own messages.
//!
//! Colors are only used when stderr is a terminal and `NO_COLOR` is not set.
//!
//! # Examples
//!
//! ```
//! use dream_cli::styled_output::{print_error, print_warning};
//!
//! print_warning("dream is being deprecated");
//! print_error("Entry point `invokeai` not found");
//! ```

use std::io::{IsTerminal, Write};

/// Check if colors should be disabled based on NO_COLOR env var.
fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

/// ANSI color codes.
mod colors {
    pub const ERROR: &str = "\x1b[38;2;255;107;107m"; // Coral red (#FF6B6B)
    pub const WARNING: &str = "\x1b[38;2;255;200;87m"; // Golden amber (#FFC857)
    pub const RESET: &str = "\x1b[0m";
}

/// Message type for styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl MessageType {
    /// Get the icon for this message type.
    fn icon(&self) -> &'static str {
        match self {
            MessageType::Warning => "[WARN]",
            MessageType::Error => "[ERROR]",
        }
    }

    /// Get the color code for this message type.
    fn color(&self) -> &'static str {
        match self {
            MessageType::Warning => colors::WARNING,
            MessageType::Error => colors::ERROR,
        }
    }
}

/// Format a message, with or without color.
pub fn format_styled(msg_type: MessageType, message: &str, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}{} {}{}",
            msg_type.color(),
            msg_type.icon(),
            message,
            colors::RESET
        )
    } else {
        format!("{} {}", msg_type.icon(), message)
    }
}

fn print_styled(msg_type: MessageType, message: &str) {
    let use_colors = !colors_disabled() && std::io::stderr().is_terminal();
    let line = format_styled(msg_type, message, use_colors);
    // Ignore write errors.
    let _ = writeln!(std::io::stderr().lock(), "{line}");
}

/// Print a warning message to stderr.
pub fn print_warning(message: &str) {
    print_styled(MessageType::Warning, message);
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    print_styled(MessageType::Error, message);
}
