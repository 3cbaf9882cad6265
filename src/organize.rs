//! Moving notes into dated or labelled folders.

use crate::error::{KrappError, Result};
use crate::note::Note;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Maps a note's `label` to a directory relative to the organize base.
pub type LabelDirectoryMap = BTreeMap<String, String>;

/// Load every `.md` note directly inside `dir`, ordered by file name.
///
/// Notes that cannot be read or parsed are skipped with a warning.
pub fn collect_notes<P: AsRef<Path>>(dir: P) -> Result<Vec<Note>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| KrappError::NoteRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| KrappError::NoteRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut notes = Vec::with_capacity(paths.len());
    for path in paths {
        match Note::load(&path) {
            Ok(note) => notes.push(note),
            Err(e) => log::warn!("skipping '{}': {}", path.display(), e),
        }
    }
    Ok(notes)
}

/// Move each note with a valid `created` date into `base/YYYY/MM`.
///
/// Notes are processed newest first. Notes without a usable date, or whose
/// move fails, stay where they are. Returns the number of notes moved.
pub fn organize_by_created<P: AsRef<Path>>(notes: &mut [Note], base: P) -> usize {
    let base = base.as_ref();
    notes.sort_by(|a, b| match (a.frontmatter.created(), b.frontmatter.created()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => std::cmp::Ordering::Equal,
    });

    let mut moved = 0;
    for note in notes.iter_mut() {
        let Ok(created) = note.frontmatter.created() else {
            continue;
        };
        let dir = base
            .join(created.format("%Y").to_string())
            .join(created.format("%m").to_string());
        if move_note(note, &dir) {
            moved += 1;
        }
    }
    moved
}

/// Move each note whose non-empty `label` appears in `map` to
/// `base/<map[label]>`. Returns the number of notes moved.
pub fn organize_by_label<P: AsRef<Path>>(
    notes: &mut [Note],
    base: P,
    map: &LabelDirectoryMap,
) -> usize {
    let base = base.as_ref();
    let mut moved = 0;
    for note in notes.iter_mut() {
        let Some(target) = note
            .frontmatter
            .label()
            .ok()
            .filter(|label| !label.is_empty())
            .and_then(|label| map.get(label))
        else {
            continue;
        };
        let dir = base.join(target);
        if move_note(note, &dir) {
            moved += 1;
        }
    }
    moved
}

fn move_note(note: &mut Note, dir: &Path) -> bool {
    let result = crate::fs::ensure_dir(dir).and_then(|()| note.move_to(dir));
    match result {
        Ok(to) => {
            log::debug!("moved note to '{}'", to.display());
            true
        }
        Err(e) => {
            log::warn!("leaving note in place: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_note(dir: &Path, name: &str, frontmatter: &str) {
        fs::write(dir.join(name), format!("---\n{frontmatter}---\n\nbody\n")).unwrap();
    }

    #[test]
    fn test_collect_notes_only_top_level_markdown() {
        let temp = TempDir::new().unwrap();
        write_note(temp.path(), "b.md", "created: 2024-01-02\n");
        write_note(temp.path(), "a.md", "created: 2024-01-01\n");
        fs::write(temp.path().join("c.txt"), "text").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        write_note(&temp.path().join("sub"), "d.md", "created: 2024-01-03\n");

        let notes = collect_notes(temp.path()).unwrap();

        let names: Vec<_> = notes
            .iter()
            .map(|n| {
                let path = n.file_path.as_ref().unwrap();
                path.file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_collect_notes_skips_malformed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.md"), "---\ntags: [x\n").unwrap();
        write_note(temp.path(), "ok.md", "label: work\n");

        let notes = collect_notes(temp.path()).unwrap();
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_collect_notes_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(collect_notes(temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_organize_by_created() {
        let temp = TempDir::new().unwrap();
        let inbox = temp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        write_note(&inbox, "old.md", "created: 2023-12-31\n");
        write_note(&inbox, "new.md", "created: 2024-01-15\n");
        write_note(&inbox, "undated.md", "tags: []\n");
        write_note(&inbox, "bad.md", "created: someday\n");

        let mut notes = collect_notes(&inbox).unwrap();
        let moved = organize_by_created(&mut notes, temp.path());

        assert_eq!(moved, 2);
        assert!(temp.path().join("2023/12/old.md").is_file());
        assert!(temp.path().join("2024/01/new.md").is_file());
        assert!(inbox.join("undated.md").is_file());
        assert!(inbox.join("bad.md").is_file());
        assert_eq!(
            notes[0].file_path.as_deref(),
            Some(temp.path().join("2024/01/new.md").as_path())
        );
    }

    #[test]
    fn test_organize_by_created_skips_failed_move() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2024"), "a file, not a directory").unwrap();
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();
        write_note(&src, "n.md", "created: 2024-05-01\n");

        let mut notes = collect_notes(&src).unwrap();

        assert_eq!(organize_by_created(&mut notes, temp.path()), 0);
        assert!(src.join("n.md").is_file());
    }

    #[test]
    fn test_organize_by_label() {
        let temp = TempDir::new().unwrap();
        let inbox = temp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        write_note(&inbox, "w.md", "label: work\n");
        write_note(&inbox, "p.md", "label: personal\n");
        write_note(&inbox, "e.md", "label: ''\n");
        write_note(&inbox, "n.md", "label: 3\n");
        write_note(&inbox, "u.md", "created: 2024-01-01\n");

        let mut map = LabelDirectoryMap::new();
        map.insert("work".to_string(), "projects/work".to_string());
        map.insert("".to_string(), "should-not-be-used".to_string());

        let mut notes = collect_notes(&inbox).unwrap();
        let moved = organize_by_label(&mut notes, temp.path(), &map);

        assert_eq!(moved, 1);
        assert!(temp.path().join("projects/work/w.md").is_file());
        for name in ["p.md", "e.md", "n.md", "u.md"] {
            assert!(inbox.join(name).is_file(), "{name} should stay");
        }
        assert!(!temp.path().join("should-not-be-used").exists());
    }
}
