//! Mock git client for testing
//!
//! Manually implements `GitClient` with call recording and error injection,
//! mirroring the production contract: clone creates the repository
//! directory, and the mock tracks which branch is currently checked out.

#![allow(dead_code)]

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use zipmr::error::{Error, Result};
use zipmr::git::GitClient;

/// Recording mock for the version-control boundary
pub struct MockGit {
    /// Every operation in call order, formatted as "op detail"
    ops: Mutex<Vec<String>>,
    current_branch: Mutex<String>,
    error_on_push: Mutex<Option<String>>,
    error_on_clone: Mutex<Option<String>>,
}

impl MockGit {
    pub fn new() -> Self {
        Self {
            ops: Mutex::new(Vec::new()),
            current_branch: Mutex::new(String::new()),
            error_on_push: Mutex::new(None),
            error_on_clone: Mutex::new(None),
        }
    }

    /// Make every subsequent push fail with `message`
    pub fn fail_pushes(&self, message: &str) {
        *self.error_on_push.lock().unwrap() = Some(message.to_string());
    }

    /// Make the clone fail with `message`
    pub fn fail_clone(&self, message: &str) {
        *self.error_on_clone.lock().unwrap() = Some(message.to_string());
    }

    /// Snapshot of all recorded operations
    pub fn operations(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    /// Branch currently checked out according to the mock
    pub fn current_branch(&self) -> String {
        self.current_branch.lock().unwrap().clone()
    }

    fn record(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }

    fn injected(&self, slot: &Mutex<Option<String>>, operation: &str) -> Result<()> {
        if let Some(detail) = slot.lock().unwrap().clone() {
            return Err(Error::Git {
                operation: operation.to_string(),
                detail,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GitClient for MockGit {
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.injected(&self.error_on_clone, "clone")?;
        fs::create_dir_all(dest)?;
        self.record(format!("clone {url}"));
        Ok(())
    }

    async fn fetch_all(&self, _repo: &Path) -> Result<()> {
        self.record("fetch".to_string());
        Ok(())
    }

    async fn checkout(&self, _repo: &Path, branch: &str) -> Result<()> {
        *self.current_branch.lock().unwrap() = branch.to_string();
        self.record(format!("checkout {branch}"));
        Ok(())
    }

    async fn create_branch(&self, _repo: &Path, branch: &str) -> Result<()> {
        *self.current_branch.lock().unwrap() = branch.to_string();
        self.record(format!("branch {branch}"));
        Ok(())
    }

    async fn add_all(&self, _repo: &Path) -> Result<()> {
        self.record("add".to_string());
        Ok(())
    }

    async fn commit(&self, _repo: &Path, message: &str) -> Result<()> {
        self.record(format!("commit {message}"));
        Ok(())
    }

    async fn push(&self, _repo: &Path, branch: &str) -> Result<()> {
        self.injected(&self.error_on_push, "push")?;
        self.record(format!("push {branch}"));
        Ok(())
    }
}
