//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use user_filters_rs::filter::Severity;

/// Formats a section header.
pub fn format_header(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Formats secondary text such as labels and hints.
pub fn format_dim(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Formats a diagnostic severity tag.
pub fn format_severity(severity: Severity, use_colors: bool) -> String {
    let label = severity.to_string();
    if !use_colors {
        return label;
    }
    match severity {
        Severity::Warning => label.yellow().to_string(),
        Severity::Info => label.blue().to_string(),
    }
}

/// Returns `"1 thing"` or `"N things"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
