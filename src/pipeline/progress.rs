//! Progress callback trait for interface-agnostic updates
//!
//! Allows different interfaces (CLI, tests, future servers) to observe the
//! pipeline while it runs.

use crate::error::Error;
use crate::types::MergeRequest;
use async_trait::async_trait;

/// Pipeline phase, one per orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Recreating the local clone
    PreparingWorkspace,
    /// Extracting the current archive into scratch space
    Extracting,
    /// Removing VCS metadata from the extracted tree
    Sanitizing,
    /// Copying allow-listed directories into the working tree
    Selecting,
    /// Branch, commit, push, and merge-request creation
    Publishing,
    /// Checking the base branch out again
    RestoringBase,
    /// Run complete
    Complete,
}

/// Progress callback trait
///
/// Implement this to receive progress updates during an import run. The CLI
/// installs a printing implementation; tests use [`NoopProgress`] or a
/// recording mock.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when processing of an archive begins
    async fn on_archive_start(&self, file_name: &str);

    /// Called when a merge request was created
    async fn on_merge_request_created(&self, mr: &MergeRequest);

    /// Called when an error occurs (non-fatal)
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_archive_start(&self, _file_name: &str) {}
    async fn on_merge_request_created(&self, _mr: &MergeRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
