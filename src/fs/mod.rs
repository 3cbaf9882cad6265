//! Filesystem helpers for krapp.
//!
//! Notes are written in place by the document model; these helpers cover
//! directory creation with a typed error and the atomic write used for the
//! shared global config file.

pub mod atomic;

pub use atomic::atomic_write;

use crate::error::{KrappError, Result};
use std::fs;
use std::path::Path;

/// Create `dir` and all of its parents.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| KrappError::DirectoryCreation {
        path: dir.to_path_buf(),
        source,
    })
}
