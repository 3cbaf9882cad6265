//! [`GitHubClient`] backed by the `gh` command-line tool.

use super::{Comment, GitHubClient, Issue, parse_github_remote};
use crate::error::{KrappError, Result};
use crate::git;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Fields requested from `gh issue list`.
const ISSUE_FIELDS: &str =
    "number,title,body,state,createdAt,updatedAt,author,assignees,labels,milestone,url";

/// Upper bound passed to `gh issue list --limit`; without it gh stops at 30.
const ISSUE_LIST_LIMIT: &str = "1000";

/// Talks to GitHub through the authenticated `gh` CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
}

impl Default for GhCli {
    fn default() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }
}

impl GhCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable in place of `gh`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> std::result::Result<String, String> {
        log::debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| format!("failed to execute {}: {}", self.program, e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(format!(
                "{} {} failed (exit code {}): {}",
                self.program,
                args.iter().take(2).copied().collect::<Vec<_>>().join(" "),
                output.status.code().unwrap_or(-1),
                stderr
            ))
        }
    }
}

#[derive(Deserialize)]
struct CommentsEnvelope {
    #[serde(default)]
    comments: Vec<Comment>,
}

impl GitHubClient for GhCli {
    /// Lists at most `ISSUE_LIST_LIMIT` (1000) open issues.
    fn list_open_issues(&self, repo: &str) -> Result<Vec<Issue>> {
        let stdout = self
            .run(&[
                "issue",
                "list",
                "--repo",
                repo,
                "--state",
                "open",
                "--limit",
                ISSUE_LIST_LIMIT,
                "--json",
                ISSUE_FIELDS,
            ])
            .map_err(KrappError::IssueList)?;

        serde_json::from_str(&stdout)
            .map_err(|e| KrappError::IssueList(format!("failed to parse issues: {}", e)))
    }

    fn issue_comments(&self, repo: &str, number: u64) -> Result<Vec<Comment>> {
        let number = number.to_string();
        let stdout = self
            .run(&["issue", "view", &number, "--repo", repo, "--json", "comments"])
            .map_err(KrappError::GitHub)?;

        let envelope: CommentsEnvelope = serde_json::from_str(&stdout)
            .map_err(|e| KrappError::GitHub(format!("failed to parse comments: {}", e)))?;
        Ok(envelope.comments)
    }

    fn close_issue(&self, repo: &str, number: u64) -> Result<()> {
        let number = number.to_string();
        self.run(&["issue", "close", &number, "--repo", repo])
            .map_err(KrappError::GitHub)?;
        Ok(())
    }

    fn current_repo(&self, base_dir: &Path) -> Result<String> {
        let url = git::origin_url(base_dir)?;
        parse_github_remote(&url)
    }
}
