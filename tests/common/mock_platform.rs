//! Mock platform service for testing
//!
//! Manually implements `PlatformService` with auto-incrementing MR numbers,
//! call tracking for verification, and per-branch error injection for
//! failure path testing.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use zipmr::error::{Error, Result};
use zipmr::platform::PlatformService;
use zipmr::types::MergeRequest;

/// Call record for `create_merge_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMrCall {
    pub source: String,
    pub target: String,
    pub title: String,
}

/// Recording mock for the merge-request API
pub struct MockPlatform {
    next_iid: AtomicU64,
    calls: Mutex<Vec<CreateMrCall>>,
    fail_for_sources: Mutex<HashSet<String>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            next_iid: AtomicU64::new(1),
            calls: Mutex::new(Vec::new()),
            fail_for_sources: Mutex::new(HashSet::new()),
        }
    }

    /// Make MR creation fail whenever `source_branch` matches
    pub fn fail_for_source(&self, source_branch: &str) {
        self.fail_for_sources
            .lock()
            .unwrap()
            .insert(source_branch.to_string());
    }

    /// Snapshot of all recorded calls
    pub fn calls(&self) -> Vec<CreateMrCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatform {
    async fn create_merge_request(
        &self,
        source: &str,
        target: &str,
        title: &str,
    ) -> Result<MergeRequest> {
        self.calls.lock().unwrap().push(CreateMrCall {
            source: source.to_string(),
            target: target.to_string(),
            title: title.to_string(),
        });

        if self.fail_for_sources.lock().unwrap().contains(source) {
            return Err(Error::Platform(format!(
                "409: injected failure for {source}"
            )));
        }

        let iid = self.next_iid.fetch_add(1, Ordering::SeqCst);
        Ok(MergeRequest {
            iid,
            web_url: format!("https://gitlab.example.com/acme/widgets/-/merge_requests/{iid}"),
            source_branch: source.to_string(),
            target_branch: target.to_string(),
            title: title.to_string(),
        })
    }
}
