//! File I/O operations for notes.

use super::Note;
use crate::error::{KrappError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

impl Note {
    /// Load a note from disk and remember its path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| KrappError::NoteRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut note = Self::parse(&raw)?;
        note.file_path = Some(path.to_path_buf());
        Ok(note)
    }

    /// Write the note to its file path, replacing any existing file.
    ///
    /// This is a plain whole-file write, not a temp-file-plus-rename.
    pub fn save(&self) -> Result<()> {
        let path = self.require_path()?;
        let content = self.to_markdown()?;
        fs::write(path, content).map_err(|source| KrappError::NoteWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the note only if no file exists at its path yet.
    ///
    /// Existence check and creation are a single `create_new` open. Returns
    /// `Ok(false)` and leaves the existing file untouched when it is already
    /// there.
    pub fn save_new(&self) -> Result<bool> {
        let path = self.require_path()?;
        let content = self.to_markdown()?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => {
                return Err(KrappError::NoteWrite {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        file.write_all(content.as_bytes())
            .map_err(|source| KrappError::NoteWrite {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(true)
    }

    /// Move the note file into `new_dir`, keeping its file name.
    ///
    /// Uses a single `rename`, so moves across filesystems fail.
    pub fn move_to<P: AsRef<Path>>(&mut self, new_dir: P) -> Result<PathBuf> {
        let from = self.require_path()?.to_path_buf();
        let file_name = from.file_name().ok_or(KrappError::PathEmpty)?;
        let to = new_dir.as_ref().join(file_name);

        fs::rename(&from, &to).map_err(|source| KrappError::NoteMove {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        self.file_path = Some(to.clone());
        Ok(to)
    }

    fn require_path(&self) -> Result<&Path> {
        match self.file_path.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(KrappError::PathEmpty),
        }
    }
}
