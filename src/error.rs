//! Error types for krapp.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so the
//! CLI can report fatal failures and exit non-zero.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for krapp operations.
#[derive(Error, Debug)]
pub enum KrappError {
    /// The note starts with a `---` line but the frontmatter is never closed.
    #[error("invalid note format: {0}")]
    Format(String),

    /// The frontmatter block is not a valid YAML mapping.
    #[error("failed to parse frontmatter: {0}")]
    FrontMatterDecode(String),

    /// The frontmatter could not be rendered as YAML.
    #[error("failed to serialize frontmatter: {0}")]
    FrontMatterEncode(String),

    /// A frontmatter field that an accessor requires is absent.
    #[error("{0} field not found")]
    FieldMissing(String),

    /// A frontmatter field holds a value of the wrong YAML type.
    #[error("{field} field has an unexpected type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// A date string could not be parsed.
    #[error("failed to parse date '{0}'")]
    InvalidDate(String),

    /// A zero-valued timestamp was supplied where a real one is required.
    #[error("invalid time: zero value")]
    InvalidTime,

    /// A note title that cannot be used inside a file name.
    #[error("invalid note title '{0}': must be non-empty and contain no path separators")]
    InvalidTitle(String),

    /// The note has no file path to save to or move from.
    #[error("note file path is empty")]
    PathEmpty,

    #[error("failed to create directory '{}': {source}", path.display())]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("failed to read note '{}': {source}", path.display())]
    NoteRead { path: PathBuf, source: io::Error },

    #[error("failed to write note '{}': {source}", path.display())]
    NoteWrite { path: PathBuf, source: io::Error },

    #[error("failed to move note from '{}' to '{}': {source}", from.display(), to.display())]
    NoteMove {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// A configuration layer could not be created, read, or decoded.
    #[error("configuration error: {0}")]
    Config(String),

    /// The origin remote is not a GitHub URL krapp understands.
    #[error("not a GitHub repository: {0}")]
    UnsupportedRemote(String),

    /// Listing open issues failed; this aborts an import run.
    #[error("failed to list issues: {0}")]
    IssueList(String),

    /// A GitHub call for a single issue failed.
    #[error("GitHub operation failed: {0}")]
    GitHub(String),

    #[error("git operation failed: {0}")]
    Git(String),

    #[error("failed to open editor: {0}")]
    Editor(String),
}

impl KrappError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KrappError::Config(_) => exit_codes::CONFIG_FAILURE,
            KrappError::Git(_) | KrappError::Editor(_) => exit_codes::PROCESS_FAILURE,
            KrappError::UnsupportedRemote(_) | KrappError::IssueList(_) | KrappError::GitHub(_) => {
                exit_codes::GITHUB_FAILURE
            }
            _ => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for krapp operations.
pub type Result<T> = std::result::Result<T, KrappError>;
