//! Check command implementation.
//!
//! Lists the conditions rendering will skip or degrade.

use std::path::Path;

use user_filters_rs::filter::diagnose;

use super::{read_filter_config, CommandContext, CommandError, Result};
use crate::output::{count_warnings, format_diagnostics_json, format_diagnostics_table};

/// Options for the check command.
pub struct CheckOptions<'a> {
    /// Config file, or `-` for stdin.
    pub file: &'a Path,
    /// Fail when any warning is reported.
    pub strict: bool,
}

/// Executes the check command.
///
/// # Errors
///
/// Returns [`CommandError::CheckFailed`] in strict mode when warnings exist.
pub fn execute(ctx: &CommandContext, opts: &CheckOptions) -> Result<()> {
    let config = read_filter_config(opts.file)?;
    let diagnostics = diagnose(&config);

    tracing::debug!(count = diagnostics.len(), "diagnosed filter config");

    if ctx.json_output {
        println!("{}", format_diagnostics_json(&diagnostics)?);
    } else {
        print!(
            "{}",
            format_diagnostics_table(&diagnostics, !ctx.quiet, ctx.use_colors)
        );
    }

    let warnings = count_warnings(&diagnostics);
    if opts.strict && warnings > 0 {
        return Err(CommandError::CheckFailed { warnings });
    }

    Ok(())
}
