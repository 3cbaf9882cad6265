//! Implementation of the `krapp create-daily` and `krapp create-inbox` commands.

use crate::cli::{CreateInboxArgs, EditArgs};
use crate::config::{Config, ConfigAdapter};
use crate::editor::open_in_editor;
use crate::error::Result;
use crate::factory::{create_daily, create_inbox};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Execute `krapp create-daily`: create today's note and print its path.
pub fn cmd_create_daily(args: EditArgs, config: &Config, now: &DateTime<Local>) -> Result<PathBuf> {
    let path = create_daily(&ConfigAdapter::new(config), now)?;
    println!("{}", path.display());
    maybe_edit(&args, config, &path)?;
    Ok(path)
}

/// Execute `krapp create-inbox <title>`: create the inbox note and print its path.
pub fn cmd_create_inbox(
    args: CreateInboxArgs,
    config: &Config,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = create_inbox(&ConfigAdapter::new(config), now, &args.title)?;
    println!("{}", path.display());
    maybe_edit(&args.edit, config, &path)?;
    Ok(path)
}

fn maybe_edit(args: &EditArgs, config: &Config, path: &Path) -> Result<()> {
    if args.edit || config.with_always_open_editor {
        open_in_editor(&config.editor, &config.editor_option, path)?;
    }
    Ok(())
}
