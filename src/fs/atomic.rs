//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` in the target's directory, synced,
//! and renamed over the target. On crash a temporary file may remain.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"))?;
    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{}.tmp", file_name)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("krapp/config.yaml");

        atomic_write(&file_path, b"editor: nvim\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "editor: nvim\n");
        assert!(!temp_dir.path().join("krapp/.config.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");
        fs::write(&file_path, "editor: vim\n").unwrap();

        atomic_write(&file_path, b"editor: code\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "editor: code\n");
    }

    #[test]
    fn test_atomic_write_rejects_path_without_file_name() {
        let err = atomic_write(Path::new("/"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
