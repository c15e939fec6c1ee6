//! Output formatting utilities for the ufilter CLI.
//!
//! Each command has a JSON formatter and a terminal formatter:
//!
//! - [`render`] - describe, sql and summary output
//! - [`check`] - diagnostic listings
//! - [`options`] - option lists
//! - [`form`] - form-derived configs
//! - [`helpers`] - colors and pluralization

mod check;
mod form;
pub mod helpers;
mod options;
mod render;

pub use check::{count_warnings, format_diagnostics_json, format_diagnostics_table};
pub use form::{format_form_json, format_form_table};
pub use options::{format_options_json, format_options_table};
pub use render::{
    format_description_json, format_sql_json, format_summary_json, format_summary_table,
};
