//! zipmr - batch-import zip bundles as GitLab merge requests
//!
//! Scans an intake directory for zip archives, copies their allow-listed
//! directories into a fresh clone of the target repository, and opens one
//! merge request per archive against a shared base branch.

pub mod config;
pub mod error;
pub mod extract;
pub mod git;
pub mod pipeline;
pub mod platform;
pub mod tree;
pub mod types;
pub mod workspace;
