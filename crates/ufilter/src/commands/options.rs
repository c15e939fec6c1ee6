//! Options command implementation.

use user_filters_rs::OptionKind;

use super::{CommandContext, Result};
use crate::output::{format_options_json, format_options_table};

/// Executes the options command, listing one kind or all of them.
pub fn execute(ctx: &CommandContext, kind: Option<OptionKind>) -> Result<()> {
    let options = ctx.config.filter_options();
    let kinds: Vec<OptionKind> = match kind {
        Some(kind) => vec![kind],
        None => OptionKind::ALL.to_vec(),
    };

    if ctx.json_output {
        println!("{}", format_options_json(&options, &kinds)?);
    } else {
        print!("{}", format_options_table(&options, &kinds, ctx.use_colors));
    }

    Ok(())
}
