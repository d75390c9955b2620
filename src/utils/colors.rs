/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

/// Urgent renewals in red, the rest of the window in yellow.
pub fn color_for_notification(urgent: bool) -> &'static str {
    if urgent { RED } else { YELLOW }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out empty placeholders (missing dates or prices).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        colorize("--", GREY)
    } else {
        value.to_string()
    }
}
