//! The user directory filter form.
//!
//! [`UserFilters`] is the flat record behind the form: a search box and a
//! few selects. It converts into an [`AdvancedFilterConfig`] so the same
//! renderers describe both simple and advanced filtering.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::filter::{
    AdvancedFilterConfig, FilterCondition, FilterGroup, FilterLogic, FilterValue, Operator,
    ValueType,
};

/// Created-date window selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRangePreset {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRangePreset {
    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangePreset::All => "all",
            DateRangePreset::Today => "today",
            DateRangePreset::Week => "week",
            DateRangePreset::Month => "month",
        }
    }

    /// First day included by the window, or `None` for `All`.
    ///
    /// Weeks start on Monday.
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRangePreset::All => None,
            DateRangePreset::Today => Some(today),
            DateRangePreset::Week => {
                let offset = today.weekday().num_days_from_monday();
                Some(today - Duration::days(i64::from(offset)))
            }
            DateRangePreset::Month => {
                Some(NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today))
            }
        }
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DateRangePreset::All),
            "today" => Ok(DateRangePreset::Today),
            "week" => Ok(DateRangePreset::Week),
            "month" => Ok(DateRangePreset::Month),
            other => Err(format!("unknown date range: {other}")),
        }
    }
}

/// Fields searched by the free-text box, with their labels.
const SEARCH_FIELDS: &[(&str, &str)] = &[("name", "Name"), ("email", "Email"), ("id", "ID")];

/// Form state for the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilters {
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangePreset>,
}

fn is_chosen(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl UserFilters {
    /// Returns true if any control narrows the list. Drives the reset button.
    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || is_chosen(&self.role)
            || is_chosen(&self.status)
            || is_chosen(&self.department)
            || self
                .date_range
                .is_some_and(|range| range != DateRangePreset::All)
    }

    /// Returns the cleared form.
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Builds the equivalent filter configuration.
    ///
    /// The search text becomes an OR group over name, email and id. The
    /// selects become one AND group, with the date preset expressed as
    /// `createdAt >= <start>` relative to `today`. A cleared form yields a
    /// config with no groups.
    pub fn to_filter_config(&self, today: NaiveDate) -> AdvancedFilterConfig {
        let mut groups = Vec::new();

        let search = self.search.trim();
        if !search.is_empty() {
            let conditions = SEARCH_FIELDS
                .iter()
                .map(|(field, label)| {
                    FilterCondition::new(*field, Operator::Contains, FilterValue::scalar(search))
                        .with_label(*label)
                })
                .collect();
            groups.push(FilterGroup::any(conditions));
        }

        let mut selected = Vec::new();
        let selects = [
            ("role", "Role", &self.role),
            ("status", "Status", &self.status),
            ("department", "Department", &self.department),
        ];
        for (field, label, value) in selects {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                selected.push(
                    FilterCondition::new(field, Operator::Eq, FilterValue::scalar(v))
                        .with_label(label)
                        .with_value_type(ValueType::Select),
                );
            }
        }

        if let Some(start) = self.date_range.and_then(|r| r.start_date(today)) {
            selected.push(
                FilterCondition::new("createdAt", Operator::Gte, FilterValue::date(start))
                    .with_label("Created Date")
                    .with_value_type(ValueType::Date),
            );
        }

        if !selected.is_empty() {
            groups.push(FilterGroup::all(selected));
        }

        AdvancedFilterConfig::new(FilterLogic::And, groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_form_is_inactive() {
        let form = UserFilters::default();
        assert!(!form.has_active_filters());
        assert!(form.to_filter_config(ymd(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_all_time_is_not_active() {
        let form = UserFilters {
            date_range: Some(DateRangePreset::All),
            ..Default::default()
        };
        assert!(!form.has_active_filters());
    }

    #[test]
    fn test_blank_search_is_not_active() {
        let form = UserFilters {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(!form.has_active_filters());
        assert!(form.to_filter_config(ymd(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_empty_select_is_not_active() {
        let form = UserFilters {
            role: Some(String::new()),
            ..Default::default()
        };
        assert!(!form.has_active_filters());
        assert!(form.to_filter_config(ymd(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_each_control_activates() {
        let forms = [
            UserFilters {
                search: "ann".into(),
                ..Default::default()
            },
            UserFilters {
                role: Some("ADMIN".into()),
                ..Default::default()
            },
            UserFilters {
                status: Some("ACTIVE".into()),
                ..Default::default()
            },
            UserFilters {
                department: Some("Sales".into()),
                ..Default::default()
            },
            UserFilters {
                date_range: Some(DateRangePreset::Week),
                ..Default::default()
            },
        ];
        for form in forms {
            assert!(form.has_active_filters(), "{form:?}");
            assert!(!form.to_filter_config(ymd(2024, 5, 15)).is_empty());
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let form = UserFilters {
            search: "x".into(),
            role: Some("ADMIN".into()),
            date_range: Some(DateRangePreset::Month),
            ..Default::default()
        };
        assert_eq!(form.reset(), UserFilters::default());
    }

    #[test]
    fn test_preset_start_dates() {
        // 2024-05-15 is a Wednesday
        let today = ymd(2024, 5, 15);
        assert_eq!(DateRangePreset::All.start_date(today), None);
        assert_eq!(DateRangePreset::Today.start_date(today), Some(today));
        assert_eq!(DateRangePreset::Week.start_date(today), Some(ymd(2024, 5, 13)));
        assert_eq!(DateRangePreset::Month.start_date(today), Some(ymd(2024, 5, 1)));
        // Monday is its own week start
        assert_eq!(
            DateRangePreset::Week.start_date(ymd(2024, 5, 13)),
            Some(ymd(2024, 5, 13))
        );
    }

    #[test]
    fn test_full_form_renders() {
        let form = UserFilters {
            search: " ann ".into(),
            role: Some("ADMIN".into()),
            status: Some("ACTIVE".into()),
            department: None,
            date_range: Some(DateRangePreset::Month),
        };
        let config = form.to_filter_config(ymd(2024, 5, 15));

        assert_eq!(config.compact_label(), "6 filters");
        assert_eq!(
            config.to_human_readable(),
            "(Name Contains ann OR Email Contains ann OR ID Contains ann) AND \
             (Role Equals ADMIN AND Status Equals ACTIVE AND Created Date Greater than or equal to 5/1/2024)"
        );
        assert_eq!(
            config.to_sql(),
            "(`name` LIKE '%ann%' OR `email` LIKE '%ann%' OR `id` LIKE '%ann%') AND \
             (`role` = 'ADMIN' AND `status` = 'ACTIVE' AND `createdAt` >= 2024-05-01)"
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let form: UserFilters =
            serde_json::from_str(r#"{"search":"","dateRange":"week","role":"STAFF"}"#).unwrap();
        assert_eq!(form.date_range, Some(DateRangePreset::Week));
        assert_eq!(form.role.as_deref(), Some("STAFF"));

        let json = serde_json::to_string(&UserFilters::default()).unwrap();
        assert_eq!(json, r#"{"search":""}"#);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Week".parse::<DateRangePreset>(), Ok(DateRangePreset::Week));
        assert!("year".parse::<DateRangePreset>().is_err());
    }
}
