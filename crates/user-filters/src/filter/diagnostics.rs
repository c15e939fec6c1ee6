//! Non-fatal checks on a filter configuration.
//!
//! Rendering silently drops or degrades conditions it cannot use. These
//! diagnostics explain what will happen to each such condition, so a form
//! or a CLI can surface it.

use std::fmt;

use serde::Serialize;
use strsim::levenshtein;

use super::ast::AdvancedFilterConfig;
use super::operator::{Arity, Operator, SqlTemplate, OPERATORS};
use super::value::FilterValue;

/// Maximum edit distance for operator suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected behavior worth knowing about.
    Info,
    /// Output differs from what the condition seems to ask for.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A note about one group or condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Index of the group in the config.
    pub group: usize,
    /// Index of the condition in its group; `None` for group-level notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<usize>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.condition {
            Some(c) => write!(
                f,
                "{}: group {} condition {}: {}",
                self.severity, self.group, c, self.message
            ),
            None => write!(f, "{}: group {}: {}", self.severity, self.group, self.message),
        }
    }
}

/// Checks a config and returns its diagnostics in document order.
pub fn diagnose(config: &AdvancedFilterConfig) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for (g, group) in config.groups.iter().enumerate() {
        if group.conditions.is_empty() {
            out.push(Diagnostic {
                severity: Severity::Info,
                group: g,
                condition: None,
                message: "group has no conditions and is skipped".to_string(),
            });
            continue;
        }

        for (c, condition) in group.conditions.iter().enumerate() {
            let mut push = |severity: Severity, message: String| {
                out.push(Diagnostic {
                    severity,
                    group: g,
                    condition: Some(c),
                    message,
                });
            };

            if !condition.is_set() {
                push(
                    Severity::Info,
                    "condition has no field and is skipped".to_string(),
                );
                continue;
            }

            let field = &condition.field;
            match (&condition.operator, condition.operator.arity()) {
                (Operator::Unknown(token), _) => {
                    let hint = suggest_operator(token)
                        .map(|s| format!(" (did you mean '{s}'?)"))
                        .unwrap_or_default();
                    push(
                        Severity::Warning,
                        format!("unknown operator '{token}' on '{field}' is left out of SQL{hint}"),
                    );
                }
                (_, Some(Arity::Unary)) if condition.value.is_some() => {
                    push(
                        Severity::Info,
                        format!(
                            "'{}' takes no value; the value on '{field}' is ignored",
                            condition.operator
                        ),
                    );
                }
                (_, Some(Arity::Range)) if !has_both_bounds(condition.value.as_ref()) => {
                    push(
                        Severity::Warning,
                        format!("'between' on '{field}' needs both bounds and is left out of SQL"),
                    );
                }
                (op, Some(Arity::Binary)) if condition.value.is_none() => {
                    let unquoted = op
                        .spec()
                        .is_some_and(|s| matches!(s.sql, SqlTemplate::Compare { quoted: false, .. }));
                    let severity = if unquoted {
                        Severity::Warning
                    } else {
                        Severity::Info
                    };
                    let consequence = if severity == Severity::Warning {
                        "is left out of SQL"
                    } else {
                        "compares against an empty string"
                    };
                    push(
                        severity,
                        format!("'{op}' on '{field}' has no value and {consequence}"),
                    );
                }
                _ => {}
            }
        }
    }

    out
}

fn has_both_bounds(value: Option<&FilterValue>) -> bool {
    match value {
        Some(FilterValue::Range { start, end }) => start.is_some() && end.is_some(),
        Some(FilterValue::List(items)) => items.len() >= 2,
        _ => false,
    }
}

/// Finds the known operator token closest to `token`.
///
/// Returns `None` when nothing is within [`MAX_SUGGESTION_DISTANCE`].
pub fn suggest_operator(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    let (best, distance) = OPERATORS
        .iter()
        .map(|spec| (spec.token, levenshtein(&lower, &spec.token.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    if distance <= MAX_SUGGESTION_DISTANCE {
        Some(best)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterCondition, FilterGroup, FilterLogic};

    fn config_of(conditions: Vec<FilterCondition>) -> AdvancedFilterConfig {
        AdvancedFilterConfig::new(FilterLogic::And, vec![FilterGroup::all(conditions)])
    }

    #[test]
    fn test_clean_config_has_no_diagnostics() {
        let config = config_of(vec![FilterCondition::new(
            "role",
            Operator::Eq,
            FilterValue::scalar("ADMIN"),
        )]);
        assert!(diagnose(&config).is_empty());
    }

    #[test]
    fn test_suggest_operator() {
        assert_eq!(suggest_operator("equals"), None);
        assert_eq!(suggest_operator("startswith"), Some("startsWith"));
        assert_eq!(suggest_operator("isnul"), Some("isNull"));
        assert_eq!(suggest_operator("notin"), Some("notIn"));
        assert_eq!(suggest_operator("completely-different"), None);
    }

    #[test]
    fn test_unknown_operator_warns_with_suggestion() {
        let config = config_of(vec![FilterCondition::new(
            "name",
            Operator::from_token("contain"),
            FilterValue::scalar("x"),
        )]);
        let diags = diagnose(&config);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("did you mean 'contains'?"));
    }

    #[test]
    fn test_empty_group_and_empty_field() {
        let config = AdvancedFilterConfig::new(
            FilterLogic::Or,
            vec![
                FilterGroup::all(vec![]),
                FilterGroup::all(vec![FilterCondition::default()]),
            ],
        );
        let diags = diagnose(&config);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].condition, None);
        assert_eq!(diags[1].group, 1);
        assert_eq!(diags[1].condition, Some(0));
        assert!(diags.iter().all(|d| d.severity == Severity::Info));
    }

    #[test]
    fn test_between_missing_bound_warns() {
        let config = config_of(vec![FilterCondition::new(
            "age",
            Operator::Between,
            FilterValue::Range {
                start: Some(18i64.into()),
                end: None,
            },
        )]);
        let diags = diagnose(&config);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_unary_with_value_is_info() {
        let mut condition = FilterCondition::unary("phone", Operator::IsNull);
        condition.value = Some(FilterValue::scalar("ignored"));
        let diags = diagnose(&config_of(vec![condition]));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Info);
    }

    #[test]
    fn test_missing_comparison_value() {
        let config = config_of(vec![
            FilterCondition::unary("age", Operator::Gt),
            FilterCondition::unary("role", Operator::Eq),
        ]);
        let diags = diagnose(&config);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[1].severity, Severity::Info);
    }

    #[test]
    fn test_display_format() {
        let d = Diagnostic {
            severity: Severity::Warning,
            group: 0,
            condition: Some(2),
            message: "oops".to_string(),
        };
        assert_eq!(d.to_string(), "warning: group 0 condition 2: oops");
    }
}
