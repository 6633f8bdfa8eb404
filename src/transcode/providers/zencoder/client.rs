//! Transport to the Zencoder API v2.
//!
//! The provider only depends on [`ZencoderTransport`]; [`HttpZencoderClient`]
//! is the production implementation. No retries happen here: failures are
//! returned as [`Error::Transport`] for the caller to act on.

use std::time::Duration;

use async_trait::async_trait;
use encodeforge_common::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::types::{CreateJobRequest, CreateJobResponse, JobProgress, RawJobStatus};
use crate::config::ZencoderConfig;

const API_KEY_HEADER: &str = "Zencoder-Api-Key";

/// Calls the provider makes against the remote service.
#[async_trait]
pub trait ZencoderTransport: Send + Sync {
    /// Submit a job and return the remote job id.
    async fn create_job(&self, request: &CreateJobRequest) -> Result<CreateJobResponse>;

    /// Fetch the job document and its progress.
    async fn fetch_status(&self, job_id: &str) -> Result<RawJobStatus>;

    async fn cancel_job(&self, job_id: &str) -> Result<()>;

    /// Check that the API is reachable and the key is accepted.
    async fn ping(&self) -> Result<()>;
}

#[derive(Deserialize)]
struct JobDetailsEnvelope {
    job: serde_json::Map<String, serde_json::Value>,
}

/// reqwest-based [`ZencoderTransport`].
pub struct HttpZencoderClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpZencoderClient {
    pub fn new(config: &ZencoderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn job_path(job_id: &str, suffix: &str) -> String {
        format!("/jobs/{}{}", urlencoding::encode(job_id), suffix)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| Error::transport(format!("{what} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::transport(format!("{what} returned {status}: {body}")));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "Zencoder GET");
        self.send(self.client.get(&url), what)
            .await?
            .json()
            .await
            .map_err(|e| Error::transport(format!("failed to parse {what} response: {e}")))
    }
}

#[async_trait]
impl ZencoderTransport for HttpZencoderClient {
    async fn create_job(&self, request: &CreateJobRequest) -> Result<CreateJobResponse> {
        let url = self.url("/jobs");
        debug!(url = %url, outputs = request.outputs.len(), "Zencoder create job");
        self.send(self.client.post(&url).json(request), "create job")
            .await?
            .json()
            .await
            .map_err(|e| Error::transport(format!("failed to parse create job response: {e}")))
    }

    async fn fetch_status(&self, job_id: &str) -> Result<RawJobStatus> {
        let details: JobDetailsEnvelope = self
            .get_json(&Self::job_path(job_id, ".json"), "job details")
            .await?;
        let progress: JobProgress = self
            .get_json(&Self::job_path(job_id, "/progress.json"), "job progress")
            .await?;

        Ok(RawJobStatus {
            job: details.job,
            progress,
        })
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        let url = self.url(&Self::job_path(job_id, "/cancel.json"));
        debug!(url = %url, "Zencoder cancel job");
        self.send(self.client.put(&url), "cancel job").await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let url = self.url("/account");
        debug!(url = %url, "Zencoder account check");
        self.send(self.client.get(&url), "account check").await?;
        Ok(())
    }
}
