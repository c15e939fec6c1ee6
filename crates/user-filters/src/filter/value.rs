//! Condition values.
//!
//! Values arrive from the form as loosely-typed JSON. They are resolved into
//! [`FilterValue`] exactly once, when a condition is deserialized, using the
//! condition's operator and [`ValueType`]. Renderers then pattern-match on
//! the shape instead of inspecting JSON at render time.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

use super::operator::{Arity, Operator};

/// Display hint attached to a condition.
///
/// Only affects human-readable formatting and value resolution; SQL output
/// is independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Text,
    Number,
    Date,
    DateRange,
    Select,
    MultiSelect,
    Boolean,
}

impl ValueType {
    /// Returns the camelCase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Date => "date",
            ValueType::DateRange => "dateRange",
            ValueType::Select => "select",
            ValueType::MultiSelect => "multiSelect",
            ValueType::Boolean => "boolean",
        }
    }

    /// Parses a wire tag; unrecognized tags fall back to `Text`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => ValueType::Number,
            "date" => ValueType::Date,
            "dateRange" => ValueType::DateRange,
            "select" => ValueType::Select,
            "multiSelect" => ValueType::MultiSelect,
            "boolean" => ValueType::Boolean,
            _ => ValueType::Text,
        }
    }

    /// Returns true for the date-bearing value types.
    pub fn is_date(&self) -> bool {
        matches!(self, ValueType::Date | ValueType::DateRange)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ValueType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ValueType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ValueType::from_tag(&tag))
    }
}

/// A single value.
///
/// Dates and timestamps keep the text they arrived as in `raw`; only the
/// human-readable renderer looks at the parsed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A calendar date (`YYYY-MM-DD` on the wire).
    Date { date: NaiveDate, raw: String },
    /// An instant (RFC 3339 on the wire).
    Timestamp { ts: DateTime<Utc>, raw: String },
}

impl Scalar {
    /// Resolves a JSON value. `null` and `""` are absent.
    pub fn from_json(raw: &Value, value_type: ValueType) -> Option<Scalar> {
        match raw {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) if value_type.is_date() => Some(parse_date_like(s)),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Number(n) => Some(Scalar::Number(n.as_f64().unwrap_or_default())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            other => Some(Scalar::Text(other.to_string())),
        }
    }

    /// Converts back to the wire representation.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Date { raw, .. } | Scalar::Timestamp { raw, .. } => Value::String(raw.clone()),
        }
    }

    /// Creates a date whose text is its ISO form.
    pub fn date(date: NaiveDate) -> Self {
        Scalar::Date {
            date,
            raw: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Creates a timestamp whose text is its RFC 3339 form.
    pub fn timestamp(ts: DateTime<Utc>) -> Self {
        Scalar::Timestamp {
            ts,
            raw: ts.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

fn parse_date_like(s: &str) -> Scalar {
    let raw = s.to_string();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Scalar::Date { date, raw };
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Scalar::Timestamp {
            ts: ts.with_timezone(&Utc),
            raw,
        };
    }
    Scalar::Text(s.to_string())
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Date { raw, .. } | Scalar::Timestamp { raw, .. } => f.write_str(raw),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(d: NaiveDate) -> Self {
        Scalar::date(d)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(ts: DateTime<Utc>) -> Self {
        Scalar::timestamp(ts)
    }
}

/// The value payload of a condition, by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// One value, for comparisons.
    Scalar(Scalar),
    /// A `[start, end]` pair; either bound may be missing.
    Range {
        start: Option<Scalar>,
        end: Option<Scalar>,
    },
    /// Several values, for membership tests.
    List(Vec<Scalar>),
}

impl FilterValue {
    /// Creates a scalar value.
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        FilterValue::Scalar(value.into())
    }

    /// Creates a date value.
    pub fn date(date: NaiveDate) -> Self {
        FilterValue::Scalar(Scalar::date(date))
    }

    /// Creates a range with both bounds present.
    pub fn range(start: impl Into<Scalar>, end: impl Into<Scalar>) -> Self {
        FilterValue::Range {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Creates a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        FilterValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Resolves a JSON value into a shape, guided by the operator and the
    /// value type. Returns `None` for `null`, `""` and unusable input.
    pub fn from_json(raw: &Value, operator: &Operator, value_type: ValueType) -> Option<Self> {
        match raw {
            Value::Array(items) => {
                let ranged = operator.arity() == Some(Arity::Range)
                    || value_type == ValueType::DateRange;
                if ranged {
                    let bound = |i: usize| items.get(i).and_then(|v| Scalar::from_json(v, value_type));
                    Some(FilterValue::Range {
                        start: bound(0),
                        end: bound(1),
                    })
                } else {
                    // blank members stay in place as empty text
                    Some(FilterValue::List(
                        items
                            .iter()
                            .map(|v| {
                                Scalar::from_json(v, value_type)
                                    .unwrap_or_else(|| Scalar::Text(String::new()))
                            })
                            .collect(),
                    ))
                }
            }
            other => Scalar::from_json(other, value_type).map(FilterValue::Scalar),
        }
    }

    /// Converts back to the wire representation.
    pub fn to_json(&self) -> Value {
        match self {
            FilterValue::Scalar(s) => s.to_json(),
            FilterValue::Range { start, end } => Value::Array(vec![
                start.as_ref().map(Scalar::to_json).unwrap_or(Value::Null),
                end.as_ref().map(Scalar::to_json).unwrap_or(Value::Null),
            ]),
            FilterValue::List(items) => Value::Array(items.iter().map(Scalar::to_json).collect()),
        }
    }

    /// Flattens the value into plain text for SQL: scalars as themselves,
    /// lists and ranges as their present elements joined with `,`.
    pub fn sql_text(&self) -> String {
        match self {
            FilterValue::Scalar(s) => s.to_string(),
            FilterValue::Range { start, end } => [start, end]
                .into_iter()
                .flatten()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            FilterValue::List(items) => items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<Scalar> for FilterValue {
    fn from(value: Scalar) -> Self {
        FilterValue::Scalar(value)
    }
}
