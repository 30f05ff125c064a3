//! Working-tree lifecycle
//!
//! Owns the single local clone the whole run mutates. The handle is created
//! by [`Workspace::prepare`] and threaded explicitly through the pipeline, so
//! it is visible from the types that no two archives can touch the clone
//! concurrently.

use crate::error::Result;
use crate::git::GitClient;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to the local clone of the target repository
pub struct Workspace<'a> {
    root: PathBuf,
    git: &'a dyn GitClient,
}

impl<'a> Workspace<'a> {
    /// Produce a clean clone checked out to `base_branch`
    ///
    /// Any pre-existing directory at `root` is removed unconditionally. Clone,
    /// fetch, or checkout failures are fatal to the whole run and propagate.
    pub async fn prepare(
        root: PathBuf,
        git: &'a dyn GitClient,
        repository_url: &str,
        base_branch: &str,
    ) -> Result<Self> {
        if root.exists() {
            debug!(path = %root.display(), "removing stale working tree");
            fs::remove_dir_all(&root)?;
        }

        info!(url = repository_url, path = %root.display(), "cloning repository");
        git.clone_repo(repository_url, &root).await?;
        git.fetch_all(&root).await?;
        git.checkout(&root, base_branch).await?;

        Ok(Self { root, git })
    }

    /// Path of the working-tree root; selected subtrees are copied here
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check out an existing branch (used to restore the base branch)
    pub async fn checkout(&self, branch: &str) -> Result<()> {
        self.git.checkout(&self.root, branch).await
    }

    /// Create and check out a new branch from the current HEAD
    pub async fn create_branch(&self, branch: &str) -> Result<()> {
        self.git.create_branch(&self.root, branch).await
    }

    /// Stage everything and commit with `message`
    pub async fn commit_all(&self, message: &str) -> Result<()> {
        self.git.add_all(&self.root).await?;
        self.git.commit(&self.root, message).await
    }

    /// Force-push `branch` to origin with upstream tracking
    pub async fn push(&self, branch: &str) -> Result<()> {
        self.git.push(&self.root, branch).await
    }
}
