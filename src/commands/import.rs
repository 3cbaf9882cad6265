//! Implementation of the `krapp import-issues` and `krapp import-notes` commands.

use crate::cli::{ImportIssuesArgs, ImportNotesArgs};
use crate::config::{Config, ConfigAdapter};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::import::{ImportOptions, ImportReport, import_issues, import_text_notes};
use chrono::{DateTime, Local};
use std::path::Path;

/// Execute `krapp import-issues` against `client`.
pub fn cmd_import_issues<G: GitHubClient + ?Sized>(
    args: ImportIssuesArgs,
    config: &Config,
    client: &G,
    now: &DateTime<Local>,
) -> Result<ImportReport> {
    let options = ImportOptions {
        repo: args.repo,
        dry_run: args.dry_run,
        no_close: args.no_close,
    };
    let report = import_issues(&ConfigAdapter::new(config), client, &options, now)?;

    for path in &report.imported {
        println!("{}", path.display());
    }
    if !report.failures.is_empty() {
        println!(
            "{} of {} issues could not be imported (see warnings above)",
            report.failures.len(),
            report.total
        );
    }
    Ok(report)
}

/// Execute `krapp import-notes <dir>`: copy notes into the inbox.
pub fn cmd_import_notes(args: ImportNotesArgs, config: &Config) -> Result<usize> {
    let inbox = Path::new(&config.base_dir).join(&config.inbox_dir);
    let copied = import_text_notes(&args.dir, &inbox)?;
    println!("{} notes imported into {}", copied, inbox.display());
    Ok(copied)
}
