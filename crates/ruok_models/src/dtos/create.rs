use super::common::HttpMethod;
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Body of `POST /v1/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "cronexp")]
    pub cron_expression: String,

    #[serde(rename = "maxRetries")]
    pub max_retries: u32,

    pub endpoint: String,

    #[serde(rename = "httpmethod")]
    pub method: HttpMethod,

    #[serde(rename = "successStatuses")]
    pub success_statuses: Vec<u16>,
}

impl CreateJobRequest {
    pub fn new(
        name: Option<String>,
        cron_expression: String,
        endpoint: String,
        method: HttpMethod,
        success_statuses: Vec<u16>,
        max_retries: u32,
    ) -> Self {
        Self {
            name: name.filter(|n| !n.trim().is_empty()),
            cron_expression: cron_expression.trim().to_string(),
            max_retries,
            endpoint: endpoint.trim().to_string(),
            method,
            success_statuses,
        }
    }

    /// Collects every problem with the request instead of stopping at the first.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = vec![];

        if self.cron_expression.is_empty() {
            errors.push("cron expression must not be empty".to_string());
        }

        if self.endpoint.is_empty() {
            errors.push("endpoint must not be empty".to_string());
        }

        if self.success_statuses.is_empty() {
            errors.push("at least one success status must be provided".to_string());
        }

        for status in self.success_statuses.iter().filter(|s| !(100..=599).contains(*s)) {
            errors.push(format!("{status} is not a valid http status code"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn validated(self) -> Result<Self> {
        self.validate().map_err(|errors| anyhow!(errors.join(", ")))?;
        Ok(self)
    }
}

/// Parses a comma separated list of http status codes such as `200, 201`.
pub fn parse_success_statuses(input: &str) -> Result<Vec<u16>> {
    let mut statuses = vec![];
    for entry in input.split(',') {
        let entry = entry.trim();
        let Ok(status) = entry.parse::<u16>() else {
            bail!("invalid success status {entry:?}, expected a comma separated list of integers");
        };
        statuses.push(status);
    }
    Ok(statuses)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// The `error` field of a failed response. Validation failures carry one
/// entry per problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Messages(Vec<String>),
}

impl Default for ErrorDetail {
    fn default() -> Self {
        Self::Message(String::new())
    }
}

/// Body the server sends along with a 4xx status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: ErrorDetail,
}

impl ErrorResponse {
    /// The reported problems, one per line.
    pub fn message(&self) -> String {
        match &self.error {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Messages(messages) => messages.join("\n"),
        }
    }
}
