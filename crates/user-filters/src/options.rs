//! Choice lists offered by the user directory filter form.
//!
//! The defaults mirror the directory's role and status vocabularies. A host
//! may replace any list (for example from its configuration file); the
//! resulting [`FilterOptions`] is built once and shared by reference.

use std::fmt;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::filter::{FilterError, FilterResult};

/// Maximum edit distance for "did you mean" suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// One selectable value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Default role choices.
pub const DEFAULT_ROLE_OPTIONS: &[(&str, &str)] = &[
    ("ADMIN", "Admin"),
    ("TEAM_LEAD", "Team Lead"),
    ("TEAM_MEMBER", "Team Member"),
    ("STAFF", "Staff"),
    ("CLIENT", "Client"),
];

/// Default status choices.
pub const DEFAULT_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("ACTIVE", "Active"),
    ("INACTIVE", "Inactive"),
    ("SUSPENDED", "Suspended"),
    ("PENDING", "Pending Activation"),
];

/// Created-date presets. Not configurable: the form logic depends on them.
pub const DATE_RANGE_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Time"),
    ("today", "Today"),
    ("week", "This Week"),
    ("month", "This Month"),
];

/// Which list an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Role,
    Status,
    Department,
    DateRange,
}

impl OptionKind {
    /// All kinds, in form order.
    pub const ALL: [OptionKind; 4] = [
        OptionKind::Role,
        OptionKind::Status,
        OptionKind::Department,
        OptionKind::DateRange,
    ];
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Role => "role",
            OptionKind::Status => "status",
            OptionKind::Department => "department",
            OptionKind::DateRange => "date range",
        };
        f.write_str(name)
    }
}

fn to_options(pairs: &[(&str, &str)]) -> Vec<FilterOption> {
    pairs
        .iter()
        .map(|(value, label)| FilterOption::new(*value, *label))
        .collect()
}

/// The option lists for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub roles: Vec<FilterOption>,
    pub statuses: Vec<FilterOption>,
    /// Empty by default; the form hides the department select then.
    pub departments: Vec<FilterOption>,
    pub date_ranges: Vec<FilterOption>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            roles: to_options(DEFAULT_ROLE_OPTIONS),
            statuses: to_options(DEFAULT_STATUS_OPTIONS),
            departments: Vec::new(),
            date_ranges: to_options(DATE_RANGE_OPTIONS),
        }
    }
}

impl FilterOptions {
    /// Replaces the role list when `roles` is non-empty.
    pub fn with_roles(mut self, roles: Vec<FilterOption>) -> Self {
        if !roles.is_empty() {
            self.roles = roles;
        }
        self
    }

    /// Replaces the status list when `statuses` is non-empty.
    pub fn with_statuses(mut self, statuses: Vec<FilterOption>) -> Self {
        if !statuses.is_empty() {
            self.statuses = statuses;
        }
        self
    }

    /// Sets the department list.
    pub fn with_departments(mut self, departments: Vec<FilterOption>) -> Self {
        self.departments = departments;
        self
    }

    /// Returns the list for a kind.
    pub fn list(&self, kind: OptionKind) -> &[FilterOption] {
        match kind {
            OptionKind::Role => &self.roles,
            OptionKind::Status => &self.statuses,
            OptionKind::Department => &self.departments,
            OptionKind::DateRange => &self.date_ranges,
        }
    }

    /// Returns the display label for a stored value.
    pub fn label_for(&self, kind: OptionKind, value: &str) -> Option<&str> {
        self.list(kind)
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Resolves user input to an option.
    ///
    /// Accepts the exact value, or the value or label case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownOption`], with the closest value as a
    /// suggestion when one is near enough.
    pub fn resolve(&self, kind: OptionKind, input: &str) -> FilterResult<&FilterOption> {
        let list = self.list(kind);

        if let Some(exact) = list.iter().find(|o| o.value == input) {
            return Ok(exact);
        }

        if let Some(loose) = list.iter().find(|o| {
            o.value.eq_ignore_ascii_case(input) || o.label.eq_ignore_ascii_case(input)
        }) {
            return Ok(loose);
        }

        Err(FilterError::unknown_option(
            kind.to_string(),
            input,
            closest_value(list, input),
        ))
    }
}

fn closest_value(list: &[FilterOption], input: &str) -> Option<String> {
    let input = input.to_lowercase();
    let (best, distance) = list
        .iter()
        .map(|o| {
            let d = levenshtein(&input, &o.value.to_lowercase())
                .min(levenshtein(&input, &o.label.to_lowercase()));
            (o, d)
        })
        .min_by_key(|(_, d)| *d)?;

    if distance <= MAX_SUGGESTION_DISTANCE {
        Some(best.value.clone())
    } else {
        None
    }
}
