//! Version-control boundary
//!
//! Every repository operation the pipeline needs goes through [`GitClient`],
//! so tests can substitute a recording mock and the orchestrator never
//! touches the `git` binary directly.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Git operations required by the import pipeline
///
/// Implementations operate on an explicit repository path; the pipeline owns
/// exactly one working tree and threads its path through every call.
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Clone `url` into `dest`
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Fetch all refs from the default remote
    async fn fetch_all(&self, repo: &Path) -> Result<()>;

    /// Check out an existing branch
    async fn checkout(&self, repo: &Path, branch: &str) -> Result<()>;

    /// Create and check out a new branch from the current HEAD
    async fn create_branch(&self, repo: &Path, branch: &str) -> Result<()>;

    /// Stage every change in the working tree
    async fn add_all(&self, repo: &Path) -> Result<()>;

    /// Commit staged changes; succeeds even when the change set is empty
    async fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Force-push `branch` to origin with upstream tracking
    async fn push(&self, repo: &Path, branch: &str) -> Result<()>;
}

/// [`GitClient`] backed by the system `git` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl SystemGit {
    async fn run(&self, operation: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|e| Error::Git {
            operation: operation.to_string(),
            detail: format!("failed to launch git: {e}"),
        })?;

        if output.status.success() {
            tracing::debug!(operation, "git operation succeeded");
            Ok(())
        } else {
            Err(Error::Git {
                operation: operation.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl GitClient for SystemGit {
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_str = dest.to_string_lossy();
        self.run("clone", &["clone", url, dest_str.as_ref()], None)
            .await
    }

    async fn fetch_all(&self, repo: &Path) -> Result<()> {
        self.run("fetch", &["fetch", "--all"], Some(repo)).await
    }

    async fn checkout(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run("checkout", &["checkout", branch], Some(repo))
            .await
    }

    async fn create_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run("checkout -b", &["checkout", "-b", branch], Some(repo))
            .await
    }

    async fn add_all(&self, repo: &Path) -> Result<()> {
        self.run("add", &["add", "--all"], Some(repo)).await
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        // --allow-empty: an archive with no allow-listed directories still
        // produces a branch, an (empty) commit, and a merge request
        self.run(
            "commit",
            &["commit", "--allow-empty", "-m", message],
            Some(repo),
        )
        .await
    }

    async fn push(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run(
            "push",
            &["push", "--force", "--set-upstream", "origin", branch],
            Some(repo),
        )
        .await
    }
}
