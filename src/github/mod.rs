//! GitHub issue access.
//!
//! The import pipeline talks to GitHub only through [`GitHubClient`]. The
//! production implementation shells out to the `gh` CLI ([`GhCli`]); tests
//! use an in-memory fake.

use crate::error::{KrappError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

mod gh;
#[cfg(test)]
pub(crate) mod fake;

pub use gh::GhCli;

/// An open issue as reported by `gh issue list --json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author: User,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub url: String,
}

impl Issue {
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    pub fn assignee_logins(&self) -> Vec<String> {
        self.assignees.iter().map(|a| a.login.clone()).collect()
    }

    /// The milestone title, if the issue has a non-empty one.
    pub fn milestone_title(&self) -> Option<&str> {
        self.milestone
            .as_ref()
            .map(|m| m.title.as_str())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author: User,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub title: String,
}

/// Operations the issue import needs from GitHub.
pub trait GitHubClient {
    /// List the open issues of `repo` (`OWNER/REPO`).
    fn list_open_issues(&self, repo: &str) -> Result<Vec<Issue>>;

    /// Fetch the comments of issue `number`, oldest first.
    fn issue_comments(&self, repo: &str, number: u64) -> Result<Vec<Comment>>;

    fn close_issue(&self, repo: &str, number: u64) -> Result<()>;

    /// Resolve `OWNER/REPO` from the `origin` remote of the repository at
    /// `base_dir`.
    fn current_repo(&self, base_dir: &Path) -> Result<String>;
}

const HTTPS_PREFIX: &str = "https://github.com/";
const SSH_PREFIX: &str = "git@github.com:";

/// Extract `OWNER/REPO` from a GitHub remote URL.
///
/// Accepts `https://github.com/OWNER/REPO[.git]` and
/// `git@github.com:OWNER/REPO[.git]`.
pub fn parse_github_remote(url: &str) -> Result<String> {
    let url = url.trim();
    let path = url
        .strip_prefix(HTTPS_PREFIX)
        .or_else(|| url.strip_prefix(SSH_PREFIX))
        .ok_or_else(|| KrappError::UnsupportedRemote(url.to_string()))?;

    let repo = path.strip_suffix(".git").unwrap_or(path);
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(repo.to_string())
        }
        _ => Err(KrappError::UnsupportedRemote(url.to_string())),
    }
}
