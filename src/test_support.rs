use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A notes repository with one commit on `main`.
pub(crate) fn create_notes_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Notes\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// A notes repository tracking a bare `origin`. Returns `(repo, origin)`.
pub(crate) fn create_notes_repo_with_origin() -> (TempDir, TempDir) {
    let origin = TempDir::new().unwrap();
    git(origin.path(), &["init", "--bare"]);

    let repo = create_notes_repo();
    let origin_str = origin.path().to_string_lossy().to_string();
    git(repo.path(), &["remote", "add", "origin", &origin_str]);
    git(repo.path(), &["push", "-u", "origin", "main"]);

    (repo, origin)
}

/// Run git in `repo_dir` and return trimmed stdout, panicking on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
