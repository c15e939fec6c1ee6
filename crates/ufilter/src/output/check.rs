//! Output for the check command.

use serde::Serialize;
use user_filters_rs::filter::{Diagnostic, Severity};

use super::helpers::{format_severity, pluralize};

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub ok: bool,
    pub warnings: usize,
    pub infos: usize,
    pub diagnostics: &'a [Diagnostic],
}

/// Counts warnings in a diagnostic list.
pub fn count_warnings(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count()
}

/// Formats diagnostics as JSON.
pub fn format_diagnostics_json(diagnostics: &[Diagnostic]) -> Result<String, serde_json::Error> {
    let warnings = count_warnings(diagnostics);
    let output = CheckOutput {
        ok: warnings == 0,
        warnings,
        infos: diagnostics.len() - warnings,
        diagnostics,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats diagnostics one per line, followed by a tally.
///
/// Info lines are left out when `show_info` is false.
pub fn format_diagnostics_table(
    diagnostics: &[Diagnostic],
    show_info: bool,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if diag.severity == Severity::Info && !show_info {
            continue;
        }
        let location = match diag.condition {
            Some(c) => format!("group {} condition {}", diag.group, c),
            None => format!("group {}", diag.group),
        };
        output.push_str(&format!(
            "{}: {}: {}\n",
            format_severity(diag.severity, use_colors),
            location,
            diag.message
        ));
    }

    let warnings = count_warnings(diagnostics);
    if diagnostics.is_empty() {
        output.push_str("No issues found.\n");
    } else {
        output.push_str(&format!(
            "{}, {}\n",
            pluralize(warnings, "warning"),
            pluralize(diagnostics.len() - warnings, "note")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(severity: Severity, condition: Option<usize>, message: &str) -> Diagnostic {
        Diagnostic {
            severity,
            group: 0,
            condition,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_table_lists_and_tallies() {
        let diags = vec![
            diag(Severity::Warning, Some(1), "unknown operator 'equals'"),
            diag(Severity::Info, None, "group has no conditions"),
        ];
        let table = format_diagnostics_table(&diags, true, false);
        assert_eq!(
            table,
            "warning: group 0 condition 1: unknown operator 'equals'\n\
             info: group 0: group has no conditions\n\
             1 warning, 1 note\n"
        );
    }

    #[test]
    fn test_table_hides_info_when_asked() {
        let diags = vec![diag(Severity::Info, Some(0), "placeholder")];
        let table = format_diagnostics_table(&diags, false, false);
        assert_eq!(table, "0 warnings, 1 note\n");
    }

    #[test]
    fn test_table_no_issues() {
        assert_eq!(format_diagnostics_table(&[], true, false), "No issues found.\n");
    }

    #[test]
    fn test_json_shape() {
        let diags = vec![diag(Severity::Warning, Some(2), "missing bound")];
        let value: serde_json::Value =
            serde_json::from_str(&format_diagnostics_json(&diags).unwrap()).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["diagnostics"][0]["severity"], "warning");
        assert_eq!(value["diagnostics"][0]["condition"], 2);
    }
}
