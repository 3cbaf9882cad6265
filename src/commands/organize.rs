//! Implementation of the `krapp organize` command.

use crate::cli::OrganizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::organize::{LabelDirectoryMap, collect_notes, organize_by_created, organize_by_label};
use std::path::{Path, PathBuf};

/// Execute `krapp organize [dir]`.
///
/// Notes directly inside the directory (the inbox by default) move below
/// that same directory: into `YYYY/MM` folders, or into the `--label`
/// target folders when any mapping is given. Notes without `created` are
/// placed by the first date in their file name or body; their files are
/// not rewritten.
pub fn cmd_organize(args: OrganizeArgs, config: &Config) -> Result<usize> {
    let dir: PathBuf = args
        .dir
        .unwrap_or_else(|| Path::new(&config.base_dir).join(&config.inbox_dir));

    let mut notes = collect_notes(&dir)?;
    let moved = if args.labels.is_empty() {
        for note in notes.iter_mut() {
            if let Err(e) = note.backfill_created() {
                log::debug!("no date for '{}': {}", display_path(note.file_path.as_deref()), e);
            }
        }
        organize_by_created(&mut notes, &dir)
    } else {
        let map: LabelDirectoryMap = args.labels.into_iter().collect();
        organize_by_label(&mut notes, &dir, &map)
    };

    println!("{} of {} notes organized in {}", moved, notes.len(), dir.display());
    Ok(moved)
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(base: &Path) -> Config {
        let mut config = Config::default();
        config.base_dir = base.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_organize_defaults_to_inbox() {
        let temp = TempDir::new().unwrap();
        let inbox = temp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        fs::write(
            inbox.join("idea.md"),
            "---\ncreated: 2024-03-02\n---\n\nidea\n",
        )
        .unwrap();

        let args = OrganizeArgs {
            dir: None,
            labels: Vec::new(),
        };
        let moved = cmd_organize(args, &config_for(temp.path())).unwrap();

        assert_eq!(moved, 1);
        assert!(inbox.join("2024/03/idea.md").is_file());
    }

    #[test]
    fn test_organize_places_undated_note_without_rewriting_it() {
        let temp = TempDir::new().unwrap();
        let inbox = temp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        let raw = "plain note written 2023-11-05\n";
        fs::write(inbox.join("memo.md"), raw).unwrap();
        fs::write(inbox.join("undated.md"), "no date here\n").unwrap();

        let args = OrganizeArgs {
            dir: None,
            labels: Vec::new(),
        };
        let moved = cmd_organize(args, &config_for(temp.path())).unwrap();

        assert_eq!(moved, 1);
        assert_eq!(
            fs::read_to_string(inbox.join("2023/11/memo.md")).unwrap(),
            raw
        );
        assert!(inbox.join("undated.md").is_file());
    }

    #[test]
    fn test_organize_by_label_mappings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("w.md"),
            "---\nlabel: work\ncreated: 2024-01-01\n---\n\nw\n",
        )
        .unwrap();

        let args = OrganizeArgs {
            dir: Some(temp.path().to_path_buf()),
            labels: vec![("work".to_string(), "projects".to_string())],
        };
        let moved = cmd_organize(args, &Config::default()).unwrap();

        assert_eq!(moved, 1);
        assert!(temp.path().join("projects/w.md").is_file());
        assert!(!temp.path().join("2024").exists());
    }

    #[test]
    fn test_organize_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let args = OrganizeArgs {
            dir: Some(temp.path().join("missing")),
            labels: Vec::new(),
        };
        assert!(cmd_organize(args, &Config::default()).is_err());
    }
}
