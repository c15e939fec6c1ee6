//! Output for the options command.

use serde::Serialize;
use user_filters_rs::{FilterOption, FilterOptions, OptionKind};

use super::helpers::{format_dim, format_header};

/// JSON output structure for the options command.
#[derive(Serialize, Default)]
pub struct OptionsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<&'a [FilterOption]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<&'a [FilterOption]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<&'a [FilterOption]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_ranges: Option<&'a [FilterOption]>,
}

/// Formats the selected option lists as JSON.
pub fn format_options_json(
    options: &FilterOptions,
    kinds: &[OptionKind],
) -> Result<String, serde_json::Error> {
    let mut output = OptionsOutput::default();
    for kind in kinds {
        let list = Some(options.list(*kind));
        match kind {
            OptionKind::Role => output.roles = list,
            OptionKind::Status => output.statuses = list,
            OptionKind::Department => output.departments = list,
            OptionKind::DateRange => output.date_ranges = list,
        }
    }
    serde_json::to_string_pretty(&output)
}

fn list_title(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::Role => "Roles",
        OptionKind::Status => "Statuses",
        OptionKind::Department => "Departments",
        OptionKind::DateRange => "Date ranges",
    }
}

/// Formats the selected option lists as value/label columns.
pub fn format_options_table(
    options: &FilterOptions,
    kinds: &[OptionKind],
    use_colors: bool,
) -> String {
    let mut output = String::new();

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_header(list_title(*kind), use_colors));
        output.push('\n');

        let list = options.list(*kind);
        if list.is_empty() {
            output.push_str(&format_dim("  (none configured)", use_colors));
            output.push('\n');
            continue;
        }

        let width = list.iter().map(|o| o.value.len()).max().unwrap_or(0);
        for option in list {
            output.push_str(&format!("  {:<width$}  {}\n", option.value, option.label));
        }
    }

    output
}
