//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::MergeRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
    project_id: String,
}

#[derive(Deserialize)]
struct MergeRequestResponse {
    iid: u64,
    web_url: String,
    source_branch: String,
    target_branch: String,
    title: String,
}

#[derive(Serialize)]
struct CreateMrPayload {
    source_branch: String,
    target_branch: String,
    title: String,
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl GitLabService {
    /// Create a new GitLab service
    ///
    /// `base_url` is the instance root (e.g. `https://gitlab.com`);
    /// `project_id` is the numeric ID or full path of the target project.
    pub fn new(token: String, project_id: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{path}", self.base_url)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_id).into_owned()
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn create_merge_request(
        &self,
        source: &str,
        target: &str,
        title: &str,
    ) -> Result<MergeRequest> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));

        let payload = CreateMrPayload {
            source_branch: source.to_string(),
            target_branch: target.to_string(),
            title: title.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Carry the response body so the caller can log the rejection
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable response body>".to_string());
            return Err(Error::Platform(format!("{status}: {body}")));
        }

        let mr: MergeRequestResponse = response.json().await?;

        Ok(MergeRequest {
            iid: mr.iid,
            web_url: mr.web_url,
            source_branch: mr.source_branch,
            target_branch: mr.target_branch,
            title: mr.title,
        })
    }
}
