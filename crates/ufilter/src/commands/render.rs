//! Describe, sql and summary command implementations.
//!
//! Each reads one filter config and prints one rendering of it.

use std::path::Path;

use super::{read_filter_config, CommandContext, Result};
use crate::output::{
    format_description_json, format_sql_json, format_summary_json, format_summary_table,
};

/// Executes the describe command.
pub fn execute_describe(ctx: &CommandContext, file: &Path) -> Result<()> {
    let config = read_filter_config(file)?;
    let options = ctx.config.render_options()?;

    if ctx.json_output {
        println!("{}", format_description_json(&config, &options)?);
    } else {
        println!("{}", config.to_human_readable_with(&options));
    }

    Ok(())
}

/// Executes the sql command.
///
/// The clause is printed for display only.
pub fn execute_sql(ctx: &CommandContext, file: &Path) -> Result<()> {
    let config = read_filter_config(file)?;

    if ctx.json_output {
        println!("{}", format_sql_json(&config)?);
    } else {
        println!("{}", config.to_sql());
        if ctx.verbose {
            eprintln!("(preview only: values are quoted for display, not for execution)");
        }
    }

    Ok(())
}

/// Executes the summary command.
pub fn execute_summary(ctx: &CommandContext, file: &Path) -> Result<()> {
    let config = read_filter_config(file)?;

    if ctx.json_output {
        println!("{}", format_summary_json(&config)?);
    } else if ctx.quiet {
        println!("{}", config.compact_label());
    } else {
        print!("{}", format_summary_table(&config, ctx.use_colors));
    }

    Ok(())
}
