//! Filter configuration model.
//!
//! A configuration is one level deep: an [`AdvancedFilterConfig`] combines
//! [`FilterGroup`]s with a [`FilterLogic`], and each group combines its
//! [`FilterCondition`]s with its own logic. Groups do not nest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::{FilterError, FilterResult};
use super::operator::Operator;
use super::value::{FilterValue, ValueType};

/// Boolean connective for groups and for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterLogic {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl FilterLogic {
    /// Returns the keyword used when joining rendered parts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterLogic::And => "AND",
            FilterLogic::Or => "OR",
        }
    }

    /// Returns the separator placed between joined parts (` AND `, ` OR `).
    pub fn separator(&self) -> String {
        format!(" {} ", self.as_str())
    }
}

impl fmt::Display for FilterLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field/operator/value predicate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ConditionRecord", into = "ConditionRecord")]
pub struct FilterCondition {
    /// Attribute under test. Empty means the condition is not set yet.
    pub field: String,
    /// Display name for the field.
    pub label: Option<String>,
    pub operator: Operator,
    /// `None` when the form left the value blank.
    pub value: Option<FilterValue>,
    pub value_type: ValueType,
}

impl FilterCondition {
    /// Creates a condition with a value.
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            label: None,
            operator,
            value: Some(value.into()),
            value_type: ValueType::default(),
        }
    }

    /// Creates a condition that carries no value (`isNull` and friends).
    pub fn unary(field: impl Into<String>, operator: Operator) -> Self {
        Self {
            field: field.into(),
            label: None,
            operator,
            value: None,
            value_type: ValueType::default(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the value type.
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Returns false for placeholder conditions with no field.
    pub fn is_set(&self) -> bool {
        !self.field.is_empty()
    }

    /// Returns the label, or the field name when there is no usable label.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.field,
        }
    }
}

/// Reads `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a list, treating a `null` list as empty and `null` entries as
/// default (blank) items.
fn null_tolerant_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Wire shape of a condition. The untyped `value` is resolved into a
/// [`FilterValue`] on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConditionRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    operator: Operator,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    value: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    value_type: ValueType,
}

impl From<ConditionRecord> for FilterCondition {
    fn from(record: ConditionRecord) -> Self {
        let value = FilterValue::from_json(&record.value, &record.operator, record.value_type);
        Self {
            field: record.field,
            label: record.label,
            operator: record.operator,
            value,
            value_type: record.value_type,
        }
    }
}

impl From<FilterCondition> for ConditionRecord {
    fn from(condition: FilterCondition) -> Self {
        Self {
            value: condition
                .value
                .as_ref()
                .map(FilterValue::to_json)
                .unwrap_or(Value::Null),
            field: condition.field,
            label: condition.label,
            operator: condition.operator,
            value_type: condition.value_type,
        }
    }
}

/// Conditions combined by one logic operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(default, deserialize_with = "null_tolerant_list")]
    pub conditions: Vec<FilterCondition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logic: FilterLogic,
}

impl FilterGroup {
    /// Creates a group.
    pub fn new(logic: FilterLogic, conditions: Vec<FilterCondition>) -> Self {
        Self { conditions, logic }
    }

    /// Creates a group whose conditions must all hold.
    pub fn all(conditions: Vec<FilterCondition>) -> Self {
        Self::new(FilterLogic::And, conditions)
    }

    /// Creates a group where any condition may hold.
    pub fn any(conditions: Vec<FilterCondition>) -> Self {
        Self::new(FilterLogic::Or, conditions)
    }

    /// Iterates over conditions that have a field.
    pub fn active_conditions(&self) -> impl Iterator<Item = &FilterCondition> {
        self.conditions.iter().filter(|c| c.is_set())
    }
}

/// Root of a filter expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvancedFilterConfig {
    #[serde(default, deserialize_with = "null_tolerant_list")]
    pub groups: Vec<FilterGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logic: FilterLogic,
}

impl AdvancedFilterConfig {
    /// Creates a config.
    pub fn new(logic: FilterLogic, groups: Vec<FilterGroup>) -> Self {
        Self { groups, logic }
    }

    /// Returns true when there is nothing to filter on: no groups, or no
    /// condition with a field.
    pub fn is_empty(&self) -> bool {
        self.groups
            .iter()
            .all(|group| group.conditions.iter().all(|c| !c.is_set()))
    }

    /// Total number of conditions, placeholders included.
    pub fn condition_count(&self) -> usize {
        self.groups.iter().map(|g| g.conditions.len()).sum()
    }

    /// Number of conditions that have a field.
    pub fn active_condition_count(&self) -> usize {
        self.groups.iter().map(|g| g.active_conditions().count()).sum()
    }

    /// Short badge text: `"1 filter"`, `"3 filters"`.
    ///
    /// Counts every condition, including ones without a field.
    pub fn compact_label(&self) -> String {
        let total = self.condition_count();
        let suffix = if total == 1 { "" } else { "s" };
        format!("{total} filter{suffix}")
    }
}

/// Parses a filter configuration from JSON.
///
/// # Errors
///
/// Returns [`FilterError::InvalidJson`] when the input is not JSON or does
/// not have the configuration's shape.
pub fn parse_config(json: &str) -> FilterResult<AdvancedFilterConfig> {
    serde_json::from_str(json).map_err(FilterError::from)
}

impl FromStr for AdvancedFilterConfig {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_config(s)
    }
}
