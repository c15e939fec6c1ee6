//! SQL-like WHERE clause rendering.
//!
//! The output is a preview for people reading it: values are spliced into
//! the text with only single quotes escaped. It is not safe to execute. Use
//! parameter binding against the structured config for real queries.

use tracing::debug;

use super::ast::{AdvancedFilterConfig, FilterCondition, FilterGroup};
use super::operator::SqlTemplate;
use super::value::FilterValue;

/// Clause returned when no condition renders.
pub const MATCH_ALL: &str = "1=1";

impl AdvancedFilterConfig {
    /// Renders a display-only WHERE clause.
    ///
    /// Conditions without a field, with an unknown operator, or with a
    /// value the operator cannot use are dropped. Returns [`MATCH_ALL`]
    /// when nothing survives.
    pub fn to_sql(&self) -> String {
        let clauses: Vec<String> = self
            .groups
            .iter()
            .map(group_to_sql)
            .filter(|clause| !clause.is_empty())
            .collect();

        if clauses.is_empty() {
            return MATCH_ALL.to_string();
        }

        clauses.join(&self.logic.separator())
    }
}

fn group_to_sql(group: &FilterGroup) -> String {
    let clauses: Vec<String> = group
        .active_conditions()
        .map(condition_to_sql)
        .filter(|clause| !clause.is_empty())
        .collect();

    let joined = clauses.join(&group.logic.separator());
    if clauses.len() > 1 {
        format!("({joined})")
    } else {
        joined
    }
}

/// Renders one condition, or an empty string if it cannot be rendered.
pub fn condition_to_sql(condition: &FilterCondition) -> String {
    if !condition.is_set() {
        return String::new();
    }

    let Some(spec) = condition.operator.spec() else {
        debug!(
            field = %condition.field,
            operator = %condition.operator,
            "dropping condition with unknown operator"
        );
        return String::new();
    };

    let field = quote_field(&condition.field);
    let clause = spec.sql.render(&field, condition.value.as_ref());
    if clause.is_empty() {
        debug!(
            field = %condition.field,
            operator = %condition.operator,
            "dropping condition without a usable value"
        );
    }
    clause
}

/// Escapes a value for a single-quoted literal by doubling `'`.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

fn quote_field(field: &str) -> String {
    format!("`{field}`")
}

fn quoted(value: &str) -> String {
    format!("'{}'", escape_sql_literal(value))
}

impl SqlTemplate {
    /// Renders the template for an already back-quoted field.
    pub fn render(&self, field: &str, value: Option<&FilterValue>) -> String {
        let text = || value.map(FilterValue::sql_text).unwrap_or_default();

        match *self {
            SqlTemplate::Compare {
                symbol,
                quoted: true,
            } => format!("{field} {symbol} {}", quoted(&text())),
            SqlTemplate::Compare {
                symbol,
                quoted: false,
            } => match value {
                Some(v) => format!("{field} {symbol} {}", v.sql_text()),
                None => String::new(),
            },
            SqlTemplate::Like { prefix, suffix } => {
                format!(
                    "{field} LIKE '{prefix}{}{suffix}'",
                    escape_sql_literal(&text())
                )
            }
            SqlTemplate::Membership { negated } => {
                let keyword = if negated { "NOT IN" } else { "IN" };
                let items = match value {
                    Some(FilterValue::List(items)) => items
                        .iter()
                        .map(|item| quoted(&item.to_string()))
                        .collect::<Vec<_>>()
                        .join(","),
                    _ => quoted(&text()),
                };
                format!("{field} {keyword} ({items})")
            }
            SqlTemplate::Between => match value {
                Some(FilterValue::Range {
                    start: Some(start),
                    end: Some(end),
                }) => format!("{field} BETWEEN {start} AND {end}"),
                Some(FilterValue::List(items)) if items.len() >= 2 => {
                    format!("{field} BETWEEN {} AND {}", items[0], items[1])
                }
                _ => String::new(),
            },
            SqlTemplate::Fixed(template) => template.replace("{field}", field),
        }
    }
}
