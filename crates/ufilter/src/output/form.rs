//! Output for the form command.

use serde::Serialize;
use user_filters_rs::{AdvancedFilterConfig, RenderOptions, UserFilters};

use super::helpers::{format_dim, format_header};

/// JSON output structure for the form command.
#[derive(Serialize)]
pub struct FormOutput<'a> {
    pub form: &'a UserFilters,
    pub active: bool,
    pub config: &'a AdvancedFilterConfig,
    pub label: String,
    pub description: String,
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// Formats a form and its derived config as JSON.
pub fn format_form_json(
    form: &UserFilters,
    config: &AdvancedFilterConfig,
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let output = FormOutput {
        form,
        active: form.has_active_filters(),
        config,
        label: config.compact_label(),
        description: config.to_human_readable_with(options),
        where_clause: config.to_sql(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a derived config for the terminal.
pub fn format_form_table(
    form: &UserFilters,
    config: &AdvancedFilterConfig,
    options: &RenderOptions,
    use_colors: bool,
) -> Result<String, serde_json::Error> {
    let mut output = String::new();

    if !form.has_active_filters() {
        output.push_str("No filters applied.\n");
        return Ok(output);
    }

    output.push_str(&format_header(&config.compact_label(), use_colors));
    output.push('\n');
    output.push_str(&format!(
        "{} {}\n",
        format_dim("Description:", use_colors),
        config.to_human_readable_with(options)
    ));
    output.push_str(&format!(
        "{} {}\n",
        format_dim("SQL:", use_colors),
        config.to_sql()
    ));
    output.push_str(&format_dim("Config:", use_colors));
    output.push('\n');
    output.push_str(&serde_json::to_string_pretty(config)?);
    output.push('\n');

    Ok(output)
}
