//! Filtering for the admin user directory.
//!
//! This crate holds the model behind the directory's filter controls and
//! the functions that describe a filter to people:
//!
//! - [`filter`]: advanced filter configurations (groups of conditions) and
//!   their human-readable, SQL-preview, badge and emptiness renderings
//! - [`form`]: the simple search-and-selects form and its conversion into a
//!   filter configuration
//! - [`options`]: the role, status, department and date-range choices

pub mod filter;
pub mod form;
pub mod options;

pub use filter::{
    parse_config, AdvancedFilterConfig, FilterCondition, FilterError, FilterGroup, FilterLogic,
    FilterResult, FilterValue, Operator, RenderOptions, ValueType,
};
pub use form::{DateRangePreset, UserFilters};
pub use options::{FilterOption, FilterOptions, OptionKind};
