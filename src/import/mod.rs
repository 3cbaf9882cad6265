//! Importing GitHub issues and external text files as notes.
//!
//! An issue import run resolves the repository, lists its open issues, and
//! turns each one into an inbox note. Each issue is processed on its own:
//! a failure fetching comments, writing the note, or closing the issue is
//! logged and recorded in the [`ImportReport`], and the run moves on. Only
//! repository resolution and listing abort the run.

use crate::config::InboxNoteConfig;
use crate::error::{KrappError, Result};
use crate::github::{GitHubClient, Issue};
use crate::note::Note;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

mod render;
mod text;

use render::{generate_issue_filename, issue_frontmatter, issue_markdown};
pub use text::import_text_notes;

/// Options for a single issue import run.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// `OWNER/REPO`; resolved from the notes repository's origin when absent.
    pub repo: Option<String>,
    /// Write notes but leave the issues open.
    pub dry_run: bool,
    /// Never close imported issues.
    pub no_close: bool,
}

impl ImportOptions {
    fn closes_issues(&self) -> bool {
        !self.dry_run && !self.no_close
    }
}

/// Outcome of a completed import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Number of open issues listed.
    pub total: usize,
    /// Notes written.
    pub imported: Vec<PathBuf>,
    /// Issue numbers closed after their note was written.
    pub closed: Vec<u64>,
    /// Issues that failed at some step, with the error message.
    pub failures: Vec<(u64, String)>,
}

impl ImportReport {
    /// Issues that went through every step without error.
    pub fn succeeded(&self) -> usize {
        self.total - self.failures.len()
    }
}

/// Import the open issues of a repository into the inbox.
pub fn import_issues<C, G>(
    cfg: &C,
    client: &G,
    options: &ImportOptions,
    now: &DateTime<Local>,
) -> Result<ImportReport>
where
    C: InboxNoteConfig + ?Sized,
    G: GitHubClient + ?Sized,
{
    let repo = match &options.repo {
        Some(repo) if !repo.is_empty() => repo.clone(),
        _ => client.current_repo(Path::new(cfg.base_dir()))?,
    };

    let issues = client.list_open_issues(&repo).map_err(|e| match e {
        KrappError::IssueList(_) => e,
        other => KrappError::IssueList(other.to_string()),
    })?;

    let mut report = ImportReport {
        total: issues.len(),
        ..ImportReport::default()
    };
    if issues.is_empty() {
        log::info!("No open issues found");
        return Ok(report);
    }
    log::info!("Found {} open issues", issues.len());

    let inbox = Path::new(cfg.base_dir()).join(cfg.inbox_dir());

    for issue in &issues {
        if let Err(e) = process_issue(client, &repo, issue, &inbox, options, now, &mut report) {
            log::warn!("failed to process issue #{}: {}", issue.number, e);
            report.failures.push((issue.number, e.to_string()));
        }
    }

    log::info!(
        "Successfully processed {}/{} issues",
        report.succeeded(),
        report.total
    );
    Ok(report)
}

fn process_issue<G: GitHubClient + ?Sized>(
    client: &G,
    repo: &str,
    issue: &Issue,
    inbox: &Path,
    options: &ImportOptions,
    now: &DateTime<Local>,
    report: &mut ImportReport,
) -> Result<()> {
    let comments = client.issue_comments(repo, issue.number)?;

    let filename = generate_issue_filename(issue);
    let path = inbox.join(&filename);
    let note = Note::new(
        issue_frontmatter(issue, now)?,
        issue_markdown(issue, &comments, now),
        path.clone(),
    );
    crate::fs::ensure_dir(inbox)?;
    note.save()?;
    report.imported.push(path);
    log::info!("Created note for issue #{}: {}", issue.number, filename);

    if options.closes_issues() {
        client.close_issue(repo, issue.number)?;
        report.closed.push(issue.number);
        log::info!("Closed issue #{}", issue.number);
    }
    Ok(())
}
