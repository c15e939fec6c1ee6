//! Filter configurations and their renderings.
//!
//! A filter configuration is a one-level boolean expression: groups of
//! field/operator/value conditions, each group joined by its own logic and
//! the groups joined by the root logic. This module renders a configuration
//! four ways:
//!
//! - [`AdvancedFilterConfig::to_human_readable`]: plain-language description
//! - [`AdvancedFilterConfig::to_sql`]: display-only SQL-like WHERE clause
//! - [`AdvancedFilterConfig::compact_label`]: badge text such as `"2 filters"`
//! - [`AdvancedFilterConfig::is_empty`]: whether anything would filter
//!
//! None of these can fail. Conditions without a field are skipped, unknown
//! operators render their raw token (or nothing, in SQL), and empty results
//! fall back to `"No filters applied"` and `"1=1"`.
//!
//! # Operators
//!
//! | token | phrase | SQL |
//! |---|---|---|
//! | `eq` / `neq` | Equals / Not equals | `` `f` = 'v' `` / `` `f` != 'v' `` |
//! | `contains` | Contains | `` `f` LIKE '%v%' `` |
//! | `startsWith` / `endsWith` | Starts with / Ends with | `` `f` LIKE 'v%' `` / `` `f` LIKE '%v' `` |
//! | `in` / `notIn` | Is any of / Is none of | `` `f` IN ('a','b') `` |
//! | `gt` `lt` `gte` `lte` | Greater than, ... | `` `f` > v `` (unquoted) |
//! | `between` | Between | `` `f` BETWEEN a AND b `` |
//! | `isEmpty` / `isNotEmpty` | Is empty / Is not empty | `` `f` = '' OR `f` IS NULL `` |
//! | `isNull` / `isNotNull` | Is null / Is not null | `` `f` IS NULL `` |
//!
//! # Example
//!
//! ```
//! use user_filters_rs::filter::parse_config;
//!
//! let config = parse_config(r#"{
//!     "logic": "AND",
//!     "groups": [{
//!         "logic": "AND",
//!         "conditions": [{ "field": "role", "operator": "eq", "value": "ADMIN" }]
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(config.to_human_readable(), "role Equals ADMIN");
//! assert_eq!(config.to_sql(), "`role` = 'ADMIN'");
//! assert_eq!(config.compact_label(), "1 filter");
//! assert!(!config.is_empty());
//! ```
//!
//! The SQL rendering only doubles single quotes. It exists for previews
//! and logs; never hand it to a database.

mod ast;
mod diagnostics;
mod error;
mod human;
mod operator;
mod sql;
mod value;

pub use ast::{parse_config, AdvancedFilterConfig, FilterCondition, FilterGroup, FilterLogic};
pub use diagnostics::{diagnose, suggest_operator, Diagnostic, Severity};
pub use error::{FilterError, FilterResult};
pub use human::{
    condition_to_human, format_value, RenderOptions, DEFAULT_DATE_FORMAT, NO_FILTERS_APPLIED,
};
pub use operator::{Arity, Operator, OperatorSpec, SqlTemplate, OPERATORS};
pub use sql::{condition_to_sql, escape_sql_literal, MATCH_ALL};
pub use value::{FilterValue, Scalar, ValueType};
