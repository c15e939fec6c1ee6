//! Human-readable rendering.
//!
//! Produces text such as `Role Equals ADMIN AND (Name Contains ann OR Email
//! Contains ann)`.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::trace;

use super::ast::{AdvancedFilterConfig, FilterCondition, FilterGroup};
use super::error::{FilterError, FilterResult};
use super::value::{FilterValue, Scalar, ValueType};

/// Text returned when no condition renders.
pub const NO_FILTERS_APPLIED: &str = "No filters applied";

/// Default date pattern, matching the en-US short date (`1/5/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Locale settings for human-readable output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    date_format: String,
    timezone: Option<Tz>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: None,
        }
    }
}

impl RenderOptions {
    /// Sets the strftime pattern used for dates.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidDateFormat`] if the pattern contains
    /// an unknown specifier.
    pub fn with_date_format(mut self, format: impl Into<String>) -> FilterResult<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(FilterError::InvalidDateFormat { format });
        }
        self.date_format = format;
        Ok(self)
    }

    /// Sets the timezone timestamps are shown in, by IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidTimezone`] for unknown names.
    pub fn with_timezone(mut self, name: &str) -> FilterResult<Self> {
        let tz: Tz = name.parse().map_err(|_| FilterError::InvalidTimezone {
            name: name.to_string(),
        })?;
        self.timezone = Some(tz);
        Ok(self)
    }

    /// Returns the date pattern.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns the display timezone; `None` means UTC.
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Formats a calendar date.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }

    /// Formats the calendar date of an instant in the display timezone.
    pub fn format_timestamp(&self, ts: &DateTime<Utc>) -> String {
        let date = match self.timezone {
            Some(tz) => ts.with_timezone(&tz).date_naive(),
            None => ts.date_naive(),
        };
        self.format_date(date)
    }
}

impl AdvancedFilterConfig {
    /// Describes the config in plain language with default options.
    pub fn to_human_readable(&self) -> String {
        self.to_human_readable_with(&RenderOptions::default())
    }

    /// Describes the config in plain language.
    ///
    /// Groups that render nothing are skipped. The root is never
    /// parenthesized. Returns [`NO_FILTERS_APPLIED`] when nothing renders.
    pub fn to_human_readable_with(&self, options: &RenderOptions) -> String {
        let parts: Vec<String> = self
            .groups
            .iter()
            .map(|group| group_to_human(group, options))
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return NO_FILTERS_APPLIED.to_string();
        }

        parts.join(&self.logic.separator())
    }
}

fn group_to_human(group: &FilterGroup, options: &RenderOptions) -> String {
    let parts: Vec<String> = group
        .active_conditions()
        .map(|condition| condition_to_human(condition, options))
        .collect();

    match parts.len() {
        0 => {
            trace!(conditions = group.conditions.len(), "skipping group with nothing to describe");
            String::new()
        }
        1 => parts.into_iter().next().unwrap_or_default(),
        _ => format!("({})", parts.join(&group.logic.separator())),
    }
}

/// Renders one condition as `<label> <phrase> [<value>]`.
pub fn condition_to_human(condition: &FilterCondition, options: &RenderOptions) -> String {
    let label = condition.display_label();
    let phrase = condition.operator.phrase();

    if condition.operator.is_unary() {
        return format!("{label} {phrase}");
    }

    let value = format_value(condition.value.as_ref(), condition.value_type, options);
    format!("{label} {phrase} {value}")
}

/// Formats a value for display. Absent values are empty.
pub fn format_value(
    value: Option<&FilterValue>,
    value_type: ValueType,
    options: &RenderOptions,
) -> String {
    match value {
        None => String::new(),
        Some(FilterValue::Scalar(scalar)) => format_scalar(scalar, options),
        Some(FilterValue::List(items)) => items
            .iter()
            .map(|item| format_scalar(item, options))
            .collect::<Vec<_>>()
            .join(", "),
        Some(FilterValue::Range { start, end }) if value_type == ValueType::DateRange => {
            let bound = |b: &Option<Scalar>| {
                b.as_ref()
                    .map(|s| format_scalar(s, options))
                    .unwrap_or_default()
            };
            format!("{} - {}", bound(start), bound(end))
        }
        Some(FilterValue::Range { start, end }) => [start, end]
            .into_iter()
            .flatten()
            .map(|s| format_scalar(s, options))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn format_scalar(scalar: &Scalar, options: &RenderOptions) -> String {
    match scalar {
        Scalar::Date { date, .. } => options.format_date(*date),
        Scalar::Timestamp { ts, .. } => options.format_timestamp(ts),
        other => other.to_string(),
    }
}
