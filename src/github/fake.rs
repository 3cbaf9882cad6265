//! In-memory [`GitHubClient`] for tests.

use super::{Comment, GitHubClient, Issue, User};
use crate::error::{KrappError, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub(crate) struct FakeGitHub {
    pub issues: Vec<Issue>,
    pub comments: BTreeMap<u64, Vec<Comment>>,
    /// Returned by `current_repo`; `None` makes it fail like a non-GitHub origin.
    pub repo: Option<String>,
    pub fail_list: bool,
    pub fail_comments_for: BTreeSet<u64>,
    pub fail_close_for: BTreeSet<u64>,
    closed: RefCell<Vec<(String, u64)>>,
    listed_repos: RefCell<Vec<String>>,
    resolved_dirs: RefCell<Vec<PathBuf>>,
}

impl FakeGitHub {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            repo: Some("owner/repo".to_string()),
            ..Self::default()
        }
    }

    /// Issue numbers closed so far, in call order.
    pub fn closed(&self) -> Vec<u64> {
        self.closed.borrow().iter().map(|(_, n)| *n).collect()
    }

    pub fn closed_in(&self) -> Vec<String> {
        self.closed.borrow().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn listed_repos(&self) -> Vec<String> {
        self.listed_repos.borrow().clone()
    }

    pub fn resolved_dirs(&self) -> Vec<PathBuf> {
        self.resolved_dirs.borrow().clone()
    }
}

impl GitHubClient for FakeGitHub {
    fn list_open_issues(&self, repo: &str) -> Result<Vec<Issue>> {
        self.listed_repos.borrow_mut().push(repo.to_string());
        if self.fail_list {
            return Err(KrappError::IssueList("simulated listing failure".to_string()));
        }
        Ok(self.issues.clone())
    }

    fn issue_comments(&self, _repo: &str, number: u64) -> Result<Vec<Comment>> {
        if self.fail_comments_for.contains(&number) {
            return Err(KrappError::GitHub(format!(
                "simulated comment failure for #{number}"
            )));
        }
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }

    fn close_issue(&self, repo: &str, number: u64) -> Result<()> {
        if self.fail_close_for.contains(&number) {
            return Err(KrappError::GitHub(format!(
                "simulated close failure for #{number}"
            )));
        }
        self.closed.borrow_mut().push((repo.to_string(), number));
        Ok(())
    }

    fn current_repo(&self, base_dir: &Path) -> Result<String> {
        self.resolved_dirs.borrow_mut().push(base_dir.to_path_buf());
        self.repo
            .clone()
            .ok_or_else(|| KrappError::UnsupportedRemote("https://example.com/x.git".to_string()))
    }
}

pub(crate) fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// A minimal open issue created on 2024-01-15.
pub(crate) fn issue(number: u64, title: &str) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        body: format!("Body of issue {number}"),
        state: "OPEN".to_string(),
        created_at: utc(2024, 1, 15, 10, 30),
        updated_at: utc(2024, 1, 16, 8, 0),
        author: user("alice"),
        assignees: Vec::new(),
        labels: Vec::new(),
        milestone: None,
        url: format!("https://github.com/owner/repo/issues/{number}"),
    }
}

pub(crate) fn user(login: &str) -> User {
    User {
        login: login.to_string(),
    }
}

pub(crate) fn comment(login: &str, body: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        body: body.to_string(),
        created_at,
        author: user(login),
    }
}
