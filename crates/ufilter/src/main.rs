use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{Command, Dispatch};

/// Environment variable holding the log filter directive.
const ENV_LOG: &str = "UFILTER_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `UFILTER_LOG`, then `RUST_LOG`, and otherwise
/// defaults to `warn` (`debug` with `--verbose`).
fn init_logging(cli: &Cli) {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_log_filter(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(!cli.no_color)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let dispatch = Dispatch::from_cli(cli);

    let config = match load_config() {
        Ok(config) => config,
        Err(e) if dispatch.tolerates_bad_config() => {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let ctx = CommandContext::new(cli, config);
    dispatch.execute(&ctx)
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::CheckFailed { .. } => "CHECK_FAILED",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(_) => 1,
        CommandError::CheckFailed { .. } => 1,
        CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Config(_) => 5,
    }
}
