//! Form command implementation.
//!
//! Builds a [`UserFilters`] from flags, validates the selects against the
//! configured option lists and prints the derived filter config.

use chrono::{Local, NaiveDate};
use user_filters_rs::{DateRangePreset, FilterOptions, OptionKind, UserFilters};

use super::{CommandContext, Result};
use crate::output::{format_form_json, format_form_table};

/// Options for the form command.
#[derive(Debug, Default)]
pub struct FormOptions {
    pub search: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub date_range: Option<DateRangePreset>,
    /// Reference date for the date window. Defaults to the local date.
    pub today: Option<NaiveDate>,
}

/// Resolves a select flag to its stored value. Empty input means "any".
fn resolve_select(
    options: &FilterOptions,
    kind: OptionKind,
    input: Option<&str>,
) -> Result<Option<String>> {
    match input.filter(|v| !v.is_empty()) {
        Some(v) => Ok(Some(options.resolve(kind, v)?.value.clone())),
        None => Ok(None),
    }
}

/// Builds the form state, mapping select input to option values.
///
/// # Errors
///
/// Returns [`super::CommandError::Filter`] when a select value is not one of
/// the configured options.
pub fn build_form(opts: &FormOptions, options: &FilterOptions) -> Result<UserFilters> {
    Ok(UserFilters {
        search: opts.search.clone(),
        role: resolve_select(options, OptionKind::Role, opts.role.as_deref())?,
        status: resolve_select(options, OptionKind::Status, opts.status.as_deref())?,
        department: resolve_select(options, OptionKind::Department, opts.department.as_deref())?,
        date_range: opts.date_range,
    })
}

/// Executes the form command.
pub fn execute(ctx: &CommandContext, opts: &FormOptions) -> Result<()> {
    let form = build_form(opts, &ctx.config.filter_options())?;
    let today = opts.today.unwrap_or_else(|| Local::now().date_naive());
    let config = form.to_filter_config(today);
    let render = ctx.config.render_options()?;

    tracing::debug!(
        %today,
        active = form.has_active_filters(),
        groups = config.groups.len(),
        "built filter config from form"
    );

    if ctx.json_output {
        println!("{}", format_form_json(&form, &config, &render)?);
    } else {
        print!(
            "{}",
            format_form_table(&form, &config, &render, ctx.use_colors)?
        );
    }

    Ok(())
}
