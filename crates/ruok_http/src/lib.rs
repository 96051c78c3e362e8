mod source;

pub use source::query_error;

use anyhow::{Result, anyhow};
use reqwest::{Client, RequestBuilder, StatusCode};
use ruok_config::RuokConfig;
use ruok_models::dtos::{
    CreateJobRequest, ErrorResponse, InstanceInfo, ListJobResultsResponse, ListJobsResponse,
    MessageResponse, PageQueryParams,
};
use serde::de::DeserializeOwned;
use std::{
    error::Error,
    fmt::{Display, Formatter},
    time::Duration,
};
use tracing::debug;

#[derive(Debug)]
pub struct RequestError {
    pub text: String,
    pub status: StatusCode,
}

impl RequestError {
    pub fn new(text: &str, status: StatusCode) -> Self {
        Self {
            text: text.to_owned(),
            status,
        }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "request failed with status code: {}", self.status)
        } else {
            write!(f, "response {}: {}", self.status, self.text)
        }
    }
}

impl Error for RequestError {}

/// Client for the `/v1` api of a ruok server.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Builds a client for the named server of the configuration, or the
    /// first configured one when no name is given.
    pub fn new(config: &RuokConfig, server: Option<&str>) -> Result<Self> {
        let server = config.server_or_first(server)?;
        Self::with_base_url(&server.base_url_http(), server.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(timeout) => builder.user_agent("ruok").timeout(timeout),
            None => builder.user_agent("ruok"),
        };

        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn jobs(&self, params: &PageQueryParams) -> Result<ListJobsResponse> {
        let url = format!("{}/v1/jobs", self.base_url);
        let request = self.client.get(&url).query(params);
        Self::json(request).await
    }

    pub async fn job_executions(
        &self,
        id: i64,
        params: &PageQueryParams,
    ) -> Result<ListJobResultsResponse> {
        let url = format!("{}/v1/jobs/{id}", self.base_url);
        let request = self.client.get(&url).query(params);
        Self::json(request).await
    }

    pub async fn instance(&self) -> Result<InstanceInfo> {
        let url = format!("{}/v1/instance", self.base_url);
        Self::json(self.client.get(&url)).await
    }

    /// Validates the request and posts it. Validation problems are reported
    /// together without contacting the server.
    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<MessageResponse> {
        if let Err(errors) = request.validate() {
            return Err(anyhow!(errors.join("\n")));
        }
        let url = format!("{}/v1/jobs", self.base_url);
        Self::json(self.client.post(&url).json(request)).await
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        debug!("response from server status: {status}");
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let text = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .map(|e| e.message())
            .filter(|e| !e.is_empty())
            .unwrap_or(body);
        Err(RequestError::new(&text, status).into())
    }
}
