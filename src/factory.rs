//! Daily and inbox note creation.
//!
//! Both factories build a note at a deterministic path and write it with
//! [`Note::save_new`], so a note that already exists at that path is never
//! overwritten. In that case the existing path is returned as if the note
//! had just been created.

use crate::config::{DailyNoteConfig, InboxNoteConfig, Template};
use crate::error::{KrappError, Result};
use crate::note::{FrontMatter, Note};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Create the daily note for `now` and return its absolute path.
///
/// The note lives at `base/daily/YYYY/MM/YYYY-MM-DD.md`.
pub fn create_daily<C: DailyNoteConfig + ?Sized>(cfg: &C, now: &DateTime<Local>) -> Result<PathBuf> {
    let dir = Path::new(cfg.base_dir())
        .join(cfg.daily_note_dir())
        .join(now.format("%Y").to_string())
        .join(now.format("%m").to_string());
    let filename = format!("{}.md", now.format("%Y-%m-%d"));

    write_once(&dir, &filename, cfg.daily_template(), now)
}

/// Create an inbox note titled `title` and return its absolute path.
///
/// The note lives at `base/inbox/YYYY-MM-DD-title.md`.
pub fn create_inbox<C: InboxNoteConfig + ?Sized>(
    cfg: &C,
    now: &DateTime<Local>,
    title: &str,
) -> Result<PathBuf> {
    validate_title(title)?;

    let dir = Path::new(cfg.base_dir()).join(cfg.inbox_dir());
    let filename = format!("{}-{}.md", now.format("%Y-%m-%d"), title);

    write_once(&dir, &filename, cfg.inbox_template(), now)
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() || title.contains(['/', '\\']) {
        return Err(KrappError::InvalidTitle(title.to_string()));
    }
    Ok(())
}

fn write_once(
    dir: &Path,
    filename: &str,
    template: &Template,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    crate::fs::ensure_dir(dir)?;

    let path = dir.join(filename);
    let path = std::path::absolute(&path).map_err(|source| KrappError::NoteWrite {
        path: path.clone(),
        source,
    })?;

    let mut frontmatter = FrontMatter::new();
    frontmatter.extend(template);
    frontmatter.set_created(now)?;

    let note = Note::new(frontmatter, "", path.clone());
    if note.save_new()? {
        log::debug!("created note '{}'", path.display());
    } else {
        log::info!("note already exists, leaving it untouched: {}", path.display());
    }

    Ok(path)
}
