//! Shared helpers for end-to-end tests
//!
//! Fixture repositories are real git repositories built in temporary
//! directories with the git CLI, the same tool the stamper queries.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run a git command in `repo`, panicking on failure
pub fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {}: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Capture stdout of a git command in `repo`
pub fn git_stdout(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {}: {}", args.join(" "), e));
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a repository on branch `main` with one committed file `foo.c`
pub fn create_fixture_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = temp_dir.path();

    git(repo, &["init"]);
    // Pin the branch name regardless of the host git's init.defaultBranch
    git(repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "user.email", "test@example.com"]);

    std::fs::write(repo.join("foo.c"), "int main(void) { return 0; }\n").unwrap();
    git(repo, &["add", "."]);
    git(repo, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Stage and commit everything currently in the working tree
pub fn commit_all(repo: &Path, message: &str) {
    git(repo, &["add", "."]);
    git(repo, &["commit", "-m", message]);
}
