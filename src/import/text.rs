//! Import of plain text and markdown files from another directory tree.

use crate::error::{KrappError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy every `.md` and `.txt` file under `src` to the same relative path
/// under `dst`. `.txt` files are renamed to `.md`; existing files at the
/// destination are replaced. When `dst` lies inside `src` its subtree is not
/// walked. Returns the number of files copied.
pub fn import_text_notes<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<usize> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    let mut copied = 0;

    let walker = WalkDir::new(src)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !e.path().starts_with(dst));
    for entry in walker {
        let entry = entry.map_err(|e| KrappError::NoteRead {
            path: e.path().map_or_else(|| src.to_path_buf(), Path::to_path_buf),
            source: io::Error::from(e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(target) = destination_for(src, dst, entry.path()) else {
            continue;
        };
        if let Some(parent) = target.parent() {
            crate::fs::ensure_dir(parent)?;
        }

        log::debug!("importing '{}'", entry.path().display());
        fs::copy(entry.path(), &target).map_err(|source| KrappError::NoteWrite {
            path: target.clone(),
            source,
        })?;
        copied += 1;
    }

    log::info!("Imported {} notes from '{}'", copied, src.display());
    Ok(copied)
}

/// Target path for a note file, or `None` for files that are not notes.
fn destination_for(src: &Path, dst: &Path, path: &Path) -> Option<PathBuf> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let rel = path.strip_prefix(src).ok()?;
    match ext.as_str() {
        "md" => Some(dst.join(rel)),
        "txt" => Some(dst.join(rel).with_extension("md")),
        _ => None,
    }
}
