//! Hosting-platform services
//!
//! Provides the merge-request API boundary behind a trait, so the pipeline
//! can be driven against a mock in tests.

mod gitlab;

pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::MergeRequest;
use async_trait::async_trait;

/// Merge-request operations on the hosting platform
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Request creation of a merge request from `source` into `target`
    async fn create_merge_request(
        &self,
        source: &str,
        target: &str,
        title: &str,
    ) -> Result<MergeRequest>;
}

/// Fixed merge-request title template naming both branches
pub fn merge_request_title(source: &str, target: &str) -> String {
    format!("Merge {source} into {target}")
}
