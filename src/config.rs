//! Run configuration loaded from the environment
//!
//! All settings are read once at process start and passed by value into the
//! pipeline; no component reads the environment after startup.

use crate::error::{Error, Result};
use std::env;

/// Default branch merge requests target
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Default prefix for generated branch names
pub const DEFAULT_BRANCH_PREFIX: &str = "script-branch";

/// Default GitLab instance
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

/// Immutable configuration for one import run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Remote repository URL to clone and push to
    pub repository_url: String,
    /// Branch all merge requests target and all work starts from
    pub base_branch: String,
    /// Private token for the merge-request API
    pub token: String,
    /// Project identifier (numeric ID or URL-encoded path)
    pub project_id: String,
    /// Base URL of the GitLab instance
    pub gitlab_url: String,
    /// Prefix prepended to every generated branch name
    pub branch_prefix: String,
    /// Directory names eligible for selection; empty means nothing is copied
    pub known_directories: Vec<String>,
}

impl RunConfig {
    /// Load configuration from environment variables
    ///
    /// Required: `REPOSITORY_URL`, `GITLAB_TOKEN`, `GITLAB_PROJECT_ID`.
    /// Optional with defaults: `BASE_BRANCH`, `BRANCH_PREFIX`, `GITLAB_URL`,
    /// `KNOWN_DIRECTORY_NAMES` (semicolon-separated, empty ⇒ no-op run).
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            repository_url: required("REPOSITORY_URL")?,
            base_branch: optional("BASE_BRANCH", DEFAULT_BASE_BRANCH),
            token: required("GITLAB_TOKEN")?,
            project_id: required("GITLAB_PROJECT_ID")?,
            gitlab_url: optional("GITLAB_URL", DEFAULT_GITLAB_URL),
            branch_prefix: optional("BRANCH_PREFIX", DEFAULT_BRANCH_PREFIX),
            known_directories: parse_known_directories(
                &env::var("KNOWN_DIRECTORY_NAMES").unwrap_or_default(),
            ),
        })
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!(
            "{name} environment variable must be set"
        ))),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse the semicolon-separated allow-list
///
/// Blank segments are dropped, names are trimmed. An empty or absent value
/// yields an empty list, which makes selection a silent no-op.
pub fn parse_known_directories(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
