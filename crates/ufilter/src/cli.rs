//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ufilter CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use user_filters_rs::{DateRangePreset, OptionKind};

/// ufilter - Preview user directory filter configurations
#[derive(Parser, Debug)]
#[command(name = "ufilter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a filter config in plain language
    #[command(alias = "d")]
    Describe {
        /// Filter config JSON file ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// Render a filter config as a SQL WHERE clause (display only, never execute it)
    Sql {
        /// Filter config JSON file ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// Show the badge label and whether the config filters anything
    #[command(alias = "s")]
    Summary {
        /// Filter config JSON file ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// Report conditions that will be skipped or degraded
    Check {
        /// Filter config JSON file ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Fail when any warning is reported
        #[arg(long)]
        strict: bool,
    },

    /// Build a filter config from form fields
    Form {
        /// Free-text search over name, email and ID
        #[arg(short, long, default_value = "")]
        search: String,

        /// Role value or label
        #[arg(short, long)]
        role: Option<String>,

        /// Status value or label
        #[arg(long)]
        status: Option<String>,

        /// Department value or label
        #[arg(short, long)]
        department: Option<String>,

        /// Created-date window
        #[arg(long, value_enum)]
        date_range: Option<DateRangeArg>,

        /// Reference date for the window (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// List the values the form offers
    Options {
        /// Only this list
        #[arg(value_enum)]
        kind: Option<OptionListArg>,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. output.date_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Created-date windows accepted by `form --date-range`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRangeArg {
    All,
    Today,
    Week,
    Month,
}

impl From<DateRangeArg> for DateRangePreset {
    fn from(arg: DateRangeArg) -> Self {
        match arg {
            DateRangeArg::All => DateRangePreset::All,
            DateRangeArg::Today => DateRangePreset::Today,
            DateRangeArg::Week => DateRangePreset::Week,
            DateRangeArg::Month => DateRangePreset::Month,
        }
    }
}

/// Option lists accepted by `options`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionListArg {
    Roles,
    Statuses,
    Departments,
    DateRanges,
}

impl From<OptionListArg> for OptionKind {
    fn from(arg: OptionListArg) -> Self {
        match arg {
            OptionListArg::Roles => OptionKind::Role,
            OptionListArg::Statuses => OptionKind::Status,
            OptionListArg::Departments => OptionKind::Department,
            OptionListArg::DateRanges => OptionKind::DateRange,
        }
    }
}

/// Shells supported by `completions`
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_describe_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["ufilter", "describe"]).unwrap();
        match cli.command {
            Some(Commands::Describe { file }) => assert_eq!(file, PathBuf::from("-")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_form_flags() {
        let cli = Cli::try_parse_from([
            "ufilter",
            "form",
            "--role",
            "admin",
            "--date-range",
            "week",
            "--today",
            "2024-05-15",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Form {
                role,
                date_range,
                today,
                search,
                ..
            }) => {
                assert_eq!(role.as_deref(), Some("admin"));
                assert_eq!(date_range, Some(DateRangeArg::Week));
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 5, 15));
                assert!(search.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["ufilter", "-q", "-v", "options"]).is_err());
    }

    #[test]
    fn test_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["ufilter", "sql", "config.json", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_option_list_arg_maps_to_kind() {
        assert_eq!(OptionKind::from(OptionListArg::DateRanges), OptionKind::DateRange);
        assert_eq!(DateRangePreset::from(DateRangeArg::Month), DateRangePreset::Month);
    }
}
