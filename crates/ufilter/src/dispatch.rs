//! Command dispatch module for routing CLI commands to their handlers.

use std::path::Path;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// A command that can be executed with a prepared context.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// A parsed command, borrowing its arguments from the CLI.
pub enum Dispatch<'a> {
    Describe(&'a Path),
    Sql(&'a Path),
    Summary(&'a Path),
    Check { file: &'a Path, strict: bool },
    Form(commands::form::FormOptions),
    Options(Option<user_filters_rs::OptionKind>),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Describe { file }) => Self::Describe(file),
            Some(Commands::Sql { file }) => Self::Sql(file),
            Some(Commands::Summary { file }) => Self::Summary(file),
            Some(Commands::Check { file, strict }) => Self::Check {
                file,
                strict: *strict,
            },
            Some(Commands::Form {
                search,
                role,
                status,
                department,
                date_range,
                today,
            }) => Self::Form(commands::form::FormOptions {
                search: search.clone(),
                role: role.clone(),
                status: status.clone(),
                department: department.clone(),
                date_range: date_range.map(Into::into),
                today: *today,
            }),
            Some(Commands::Options { kind }) => Self::Options(kind.map(Into::into)),
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }

    /// Returns true for commands that should still run when the config
    /// file cannot be loaded.
    pub fn tolerates_bad_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Completions(_) | Self::Help)
    }
}

impl Command for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Describe(file) => commands::render::execute_describe(ctx, file),
            Self::Sql(file) => commands::render::execute_sql(ctx, file),
            Self::Summary(file) => commands::render::execute_summary(ctx, file),
            Self::Check { file, strict } => {
                let opts = commands::check::CheckOptions {
                    file,
                    strict: *strict,
                };
                commands::check::execute(ctx, &opts)
            }
            Self::Form(opts) => commands::form::execute(ctx, opts),
            Self::Options(kind) => commands::options::execute(ctx, *kind),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ufilter - user directory filter previews");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
