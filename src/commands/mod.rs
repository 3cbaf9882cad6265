//! Command implementations for krapp.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command receives the merged configuration; the
//! current time and the GitHub client are chosen here.

mod create;
mod import;
mod organize;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::git;
use crate::github::GhCli;
use chrono::Local;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    let now = Local::now();
    match command {
        Command::Config => cmd_config(config),
        Command::CreateDaily(args) => create::cmd_create_daily(args, config, &now).map(drop),
        Command::CreateInbox(args) => create::cmd_create_inbox(args, config, &now).map(drop),
        Command::Sync => cmd_sync(config),
        Command::ImportNotes(args) => import::cmd_import_notes(args, config).map(drop),
        Command::ImportIssues(args) => {
            import::cmd_import_issues(args, config, &GhCli::new(), &now).map(drop)
        }
        Command::Organize(args) => organize::cmd_organize(args, config).map(drop),
    }
}

/// Execute `krapp config`: print the merged configuration.
fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Execute `krapp sync` in the notes base directory.
fn cmd_sync(config: &Config) -> Result<()> {
    git::sync(&config.base_dir)?;
    println!("Synced {}", config.base_dir);
    Ok(())
}
