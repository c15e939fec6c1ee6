//! Output for the describe, sql and summary commands.

use serde::Serialize;
use user_filters_rs::{AdvancedFilterConfig, RenderOptions};

use super::helpers::{format_dim, format_header, pluralize};

/// JSON output structure for the describe command.
#[derive(Serialize)]
pub struct DescribeOutput {
    pub description: String,
    pub empty: bool,
}

/// Formats a config description as JSON.
pub fn format_description_json(
    config: &AdvancedFilterConfig,
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let output = DescribeOutput {
        description: config.to_human_readable_with(options),
        empty: config.is_empty(),
    };
    serde_json::to_string_pretty(&output)
}

/// JSON output structure for the sql command.
#[derive(Serialize)]
pub struct SqlOutput {
    #[serde(rename = "where")]
    pub where_clause: String,
    /// Always true: the clause is a preview and must not be executed.
    pub display_only: bool,
}

/// Formats a SQL preview as JSON.
pub fn format_sql_json(config: &AdvancedFilterConfig) -> Result<String, serde_json::Error> {
    let output = SqlOutput {
        where_clause: config.to_sql(),
        display_only: true,
    };
    serde_json::to_string_pretty(&output)
}

/// JSON output structure for the summary command.
#[derive(Serialize)]
pub struct SummaryOutput {
    pub label: String,
    pub groups: usize,
    pub conditions: usize,
    pub active_conditions: usize,
    pub empty: bool,
}

impl SummaryOutput {
    /// Collects the summary figures for a config.
    pub fn new(config: &AdvancedFilterConfig) -> Self {
        Self {
            label: config.compact_label(),
            groups: config.groups.len(),
            conditions: config.condition_count(),
            active_conditions: config.active_condition_count(),
            empty: config.is_empty(),
        }
    }
}

/// Formats a summary as JSON.
pub fn format_summary_json(config: &AdvancedFilterConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SummaryOutput::new(config))
}

/// Formats a summary for the terminal.
pub fn format_summary_table(config: &AdvancedFilterConfig, use_colors: bool) -> String {
    let summary = SummaryOutput::new(config);
    let mut output = String::new();

    output.push_str(&format_header(&summary.label, use_colors));
    output.push('\n');

    let detail = format!(
        "{} in {}, {} with a field",
        pluralize(summary.conditions, "condition"),
        pluralize(summary.groups, "group"),
        summary.active_conditions
    );
    output.push_str(&format_dim(&detail, use_colors));
    output.push('\n');

    if summary.empty {
        output.push_str("Filters nothing.\n");
    }

    output
}
