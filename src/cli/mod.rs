//! CLI argument parsing for krapp.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Krapp: a markdown note keeper.
///
/// Notes live under a base directory as markdown files with YAML
/// frontmatter:
/// - one daily note per day under `daily/YYYY/MM/`
/// - inbox notes for quick capture, including imported GitHub issues
#[derive(Parser, Debug)]
#[command(name = "krapp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for krapp.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the merged configuration as YAML.
    Config,

    /// Create today's daily note.
    ///
    /// An existing daily note is left untouched; its path is printed either way.
    #[command(alias = "cd")]
    CreateDaily(EditArgs),

    /// Create a dated inbox note with the given title.
    #[command(alias = "ci")]
    CreateInbox(CreateInboxArgs),

    /// Commit all changes in the notes directory, then pull and push.
    Sync,

    /// Copy .md and .txt files from a directory tree into the inbox.
    #[command(alias = "in")]
    ImportNotes(ImportNotesArgs),

    /// Import open GitHub issues as inbox notes.
    ///
    /// Each issue becomes a note and is closed afterwards unless
    /// `--dry-run` or `--no-close` is given.
    #[command(alias = "ii")]
    ImportIssues(ImportIssuesArgs),

    /// Move notes into `YYYY/MM` folders by their `created` date.
    ///
    /// With `--label`, notes are moved by their `label` field instead.
    Organize(OrganizeArgs),
}

/// Shared flag for commands that create a note.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Open the note in the configured editor afterwards.
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `create-inbox` command.
#[derive(Parser, Debug)]
pub struct CreateInboxArgs {
    /// Title used in the file name (`YYYY-MM-DD-<title>.md`).
    pub title: String,

    #[command(flatten)]
    pub edit: EditArgs,
}

/// Arguments for the `import-notes` command.
#[derive(Parser, Debug)]
pub struct ImportNotesArgs {
    /// Directory to import from.
    pub dir: PathBuf,
}

/// Arguments for the `import-issues` command.
#[derive(Parser, Debug)]
pub struct ImportIssuesArgs {
    /// Repository as OWNER/REPO. Defaults to the origin of the notes directory.
    #[arg(long)]
    pub repo: Option<String>,

    /// Write notes but do not close any issue.
    #[arg(long)]
    pub dry_run: bool,

    /// Keep imported issues open.
    #[arg(long)]
    pub no_close: bool,
}

/// Arguments for the `organize` command.
#[derive(Parser, Debug)]
pub struct OrganizeArgs {
    /// Directory whose notes are organized. Defaults to the inbox.
    pub dir: Option<PathBuf>,

    /// Sort by `label` instead of date: move notes labelled LABEL into DIR.
    /// May be repeated.
    #[arg(long = "label", value_name = "LABEL=DIR", value_parser = parse_label_mapping)]
    pub labels: Vec<(String, String)>,
}

fn parse_label_mapping(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((label, dir)) if !label.is_empty() && !dir.is_empty() => {
            Ok((label.to_string(), dir.to_string()))
        }
        _ => Err(format!("expected LABEL=DIR, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["krapp", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config));
    }

    #[test]
    fn parse_create_daily_alias_with_edit() {
        let cli = Cli::try_parse_from(["krapp", "cd", "-e"]).unwrap();
        if let Command::CreateDaily(args) = cli.command {
            assert!(args.edit);
        } else {
            panic!("Expected CreateDaily command");
        }

        let cli = Cli::try_parse_from(["krapp", "create-daily"]).unwrap();
        assert!(matches!(cli.command, Command::CreateDaily(EditArgs { edit: false })));
    }

    #[test]
    fn parse_create_inbox() {
        let cli = Cli::try_parse_from(["krapp", "ci", "reading-list", "--edit"]).unwrap();
        if let Command::CreateInbox(args) = cli.command {
            assert_eq!(args.title, "reading-list");
            assert!(args.edit.edit);
        } else {
            panic!("Expected CreateInbox command");
        }
    }

    #[test]
    fn parse_create_inbox_requires_title() {
        assert!(Cli::try_parse_from(["krapp", "create-inbox"]).is_err());
    }

    #[test]
    fn parse_import_issues_flags() {
        let cli = Cli::try_parse_from([
            "krapp",
            "import-issues",
            "--repo",
            "alice/notes",
            "--dry-run",
        ])
        .unwrap();
        if let Command::ImportIssues(args) = cli.command {
            assert_eq!(args.repo.as_deref(), Some("alice/notes"));
            assert!(args.dry_run);
            assert!(!args.no_close);
        } else {
            panic!("Expected ImportIssues command");
        }

        let cli = Cli::try_parse_from(["krapp", "ii", "--no-close"]).unwrap();
        if let Command::ImportIssues(args) = cli.command {
            assert!(args.repo.is_none());
            assert!(args.no_close);
        } else {
            panic!("Expected ImportIssues command");
        }
    }

    #[test]
    fn parse_import_notes_and_organize() {
        let cli = Cli::try_parse_from(["krapp", "in", "/tmp/old-notes"]).unwrap();
        if let Command::ImportNotes(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("/tmp/old-notes"));
        } else {
            panic!("Expected ImportNotes command");
        }

        let cli = Cli::try_parse_from(["krapp", "organize"]).unwrap();
        if let Command::Organize(args) = cli.command {
            assert!(args.dir.is_none());
            assert!(args.labels.is_empty());
        } else {
            panic!("Expected Organize command");
        }
    }

    #[test]
    fn parse_organize_label_mappings() {
        let cli = Cli::try_parse_from([
            "krapp",
            "organize",
            "notes/inbox",
            "--label",
            "work=projects/work",
            "--label",
            "home=personal",
        ])
        .unwrap();
        if let Command::Organize(args) = cli.command {
            assert_eq!(args.dir, Some(PathBuf::from("notes/inbox")));
            assert_eq!(
                args.labels,
                vec![
                    ("work".to_string(), "projects/work".to_string()),
                    ("home".to_string(), "personal".to_string()),
                ]
            );
        } else {
            panic!("Expected Organize command");
        }

        assert!(Cli::try_parse_from(["krapp", "organize", "--label", "work"]).is_err());
        assert!(Cli::try_parse_from(["krapp", "organize", "--label", "=dir"]).is_err());
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(Cli::try_parse_from(["krapp", "frobnicate"]).is_err());
    }
}
