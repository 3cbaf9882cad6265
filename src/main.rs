//! Krapp: a markdown note keeper with daily notes, an inbox, and GitHub
//! issue import.
//!
//! This is the main entry point for the `krapp` CLI. It sets up logging,
//! loads the layered configuration, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod factory;
pub mod fs;
pub mod git;
pub mod github;
pub mod import;
pub mod note;
pub mod organize;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::{Config, ConfigPaths};
use error::Result;
use std::process::ExitCode;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn load_config() -> Result<Config> {
    let paths = ConfigPaths::from_env()?;
    Config::load_layered(&paths)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    let result = load_config().and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
