/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Grey placeholder for an empty field, the value itself otherwise.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}

/// Colour for a job type label in listings.
pub fn color_for_job_type(label: &str) -> &'static str {
    match label {
        "Pre-Job" => YELLOW,
        _ => GREEN,
    }
}
