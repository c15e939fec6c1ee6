//! Command implementations for the ufilter CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod form;
pub mod options;
pub mod render;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use user_filters_rs::{parse_config, AdvancedFilterConfig};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing or option error.
    #[error("filter error: {0}")]
    Filter(#[from] user_filters_rs::FilterError),

    /// `check --strict` found warnings.
    #[error("check failed: {warnings} warning(s)")]
    CheckFailed {
        /// Number of warnings reported.
        warnings: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Settings loaded from the config file.
    pub config: config::Config,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless `--no-color`, the `NO_COLOR` environment
    /// variable, or `output.color = false` turns them off.
    pub fn new(cli: &Cli, config: config::Config) -> Self {
        let use_colors = !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && config.output.color != Some(false);
        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
            config,
        }
    }
}

/// Reads and parses a filter config from a file, or from stdin for `-`.
pub fn read_filter_config(path: &Path) -> Result<AdvancedFilterConfig> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    tracing::debug!(
        source = %path.display(),
        bytes = content.len(),
        "read filter config"
    );

    Ok(parse_config(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_filter_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"logic":"AND","groups":[{{"logic":"AND","conditions":[{{"field":"role","operator":"eq","value":"STAFF"}}]}}]}}"#
        )
        .unwrap();

        let config = read_filter_config(file.path()).unwrap();
        assert_eq!(config.to_sql(), "`role` = 'STAFF'");
    }

    #[test]
    fn test_read_filter_config_missing_file() {
        let err = read_filter_config(Path::new("/nonexistent/ufilter/config.json")).unwrap_err();
        assert!(matches!(err, CommandError::Io(_)));
    }

    #[test]
    fn test_read_filter_config_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_filter_config(file.path()).unwrap_err();
        assert!(matches!(err, CommandError::Filter(_)));
    }
}
