//! Git command runner for krapp.
//!
//! Wraps git invocations with captured stdout/stderr. The notes collection
//! is synced by committing everything and doing a pull then push.

use crate::error::{KrappError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Commit message used by [`sync`].
pub const SYNC_COMMIT_MESSAGE: &str = "add";

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command in `cwd`.
///
/// A non-zero exit status is a [`KrappError::Git`] carrying stderr (or
/// stdout when stderr is empty).
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    log::debug!("running git {} in '{}'", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            KrappError::Git(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(KrappError::Git(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Read the URL of the `origin` remote of the repository at `cwd`.
pub fn origin_url<P: AsRef<Path>>(cwd: P) -> Result<String> {
    Ok(run_git(cwd, &["remote", "get-url", "origin"])?.stdout)
}

/// Stage everything, commit, pull, and push the notes repository at `base_dir`.
///
/// Steps run in order and the first failure stops the sync.
pub fn sync<P: AsRef<Path>>(base_dir: P) -> Result<()> {
    let base_dir = base_dir.as_ref();
    let steps: [&[&str]; 4] = [
        &["add", "."],
        &["commit", "-m", SYNC_COMMIT_MESSAGE],
        &["pull"],
        &["push"],
    ];

    for args in steps {
        let output = run_git(base_dir, args)?;
        if !output.stdout.is_empty() {
            log::info!("{}", output.stdout);
        }
    }
    Ok(())
}
