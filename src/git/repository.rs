//! Git Repository Provider
//!
//! Resolves HEAD and the branch name through gix, and shells out to the git
//! tool for the describe string and the short status listing. The describe
//! dirty-suffix convention is git's own; the string is passed through
//! opaque and unparsed.

use crate::git::MetadataProvider;
use crate::stamp::error::{StampError, StampResult};
use crate::stamp::types::BuildMetadata;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub struct GitRepository {
    repo: gix::Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open the repository containing `path`.
    ///
    /// Fails with `MetadataUnavailable` when the directory is not under
    /// git control.
    pub fn discover(path: &Path) -> StampResult<Self> {
        let repo = gix::discover(path).map_err(|e| StampError::MetadataUnavailable {
            message: format!("{} is not a git repository: {}", path.display(), e),
        })?;
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    fn commit_hash(&self) -> StampResult<String> {
        let head_id = self
            .repo
            .head_id()
            .map_err(|e| StampError::MetadataUnavailable {
                message: format!("Failed to resolve HEAD (repository has no commits?): {}", e),
            })?;
        Ok(head_id.to_string())
    }

    fn branch_name(&self) -> StampResult<String> {
        let name = self
            .repo
            .head_name()
            .map_err(|e| StampError::MetadataUnavailable {
                message: format!("Failed to read HEAD reference: {}", e),
            })?;
        match name {
            Some(full_name) => Ok(full_name.shorten().to_string()),
            None => Err(StampError::MetadataUnavailable {
                message: "HEAD is detached, no branch name to stamp".to_string(),
            }),
        }
    }

    /// Run a git query in the repository directory and return its stdout
    fn git_query(&self, args: &[&str]) -> StampResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| StampError::MetadataUnavailable {
                message: format!("Failed to run git {}: {}", args.join(" "), e),
            })?;
        if !output.status.success() {
            return Err(StampError::MetadataUnavailable {
                message: format!(
                    "git {} failed: {}",
                    args.join(" "),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl MetadataProvider for GitRepository {
    fn collect(&self) -> StampResult<BuildMetadata> {
        let commit_hash = self.commit_hash()?;
        let branch_name = self.branch_name()?;
        let describe = self
            .git_query(&["describe", "--always", "--dirty", "--tags"])?
            .trim()
            .to_string();
        // Porcelain lines carry meaningful leading whitespace, only strip
        // the line terminators.
        let status_lines = self
            .git_query(&["status", "--porcelain"])?
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(BuildMetadata {
            commit_hash,
            branch_name,
            describe,
            status_lines,
        })
    }
}
