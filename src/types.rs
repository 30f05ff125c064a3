//! Core types for zipmr

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A zip archive queued for import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// Full path to the `.zip` file
    pub path: PathBuf,
    /// File name including the `.zip` suffix (e.g. "release-1.zip")
    pub file_name: String,
    /// File name without the `.zip` suffix (e.g. "release-1")
    pub stem: String,
}

impl Archive {
    /// Build an archive descriptor from a path ending in `.zip`
    ///
    /// Returns `None` if the path has no UTF-8 file name or does not carry
    /// the `.zip` suffix.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let stem = file_name.strip_suffix(".zip")?.to_string();
        // A bare ".zip" has no identity to derive a branch or scratch dir from
        if stem.is_empty() {
            return None;
        }
        Some(Self {
            path,
            file_name,
            stem,
        })
    }

    /// Branch name for this archive: `<prefix>-<stem>`
    pub fn branch_name(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.stem)
    }

    /// Commit message identifying the source archive
    pub fn commit_message(&self) -> String {
        format!("Add files from {}", self.file_name)
    }
}

/// A merge request created on the hosting platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    /// MR number within the project
    pub iid: u64,
    /// Web URL for the MR
    pub web_url: String,
    /// Source (head) branch name
    pub source_branch: String,
    /// Target (base) branch name
    pub target_branch: String,
    /// MR title
    pub title: String,
}
