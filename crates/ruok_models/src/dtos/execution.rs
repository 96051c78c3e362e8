use super::common::{ListedMethod, Timestamp, null_as_default};
use serde::{Deserialize, Serialize};

/// A completed attempt of a job. The endpoint and method are copies of the
/// job's values at the time the attempt ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExecution {
    pub id: i64,

    pub job_id: i64,

    pub endpoint: String,

    #[serde(rename = "httpmethod")]
    pub method: ListedMethod,

    #[serde(default)]
    pub last_status_code: u16,

    #[serde(default, deserialize_with = "null_as_default")]
    pub succeeded: String,

    #[serde(default)]
    pub last_response_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_execution_decodes_server_payload() {
        let json = r#"{
            "id": 31,
            "jobId": 7,
            "cronexp": "*/5 * * * *",
            "lastResponseAt": "2023-12-01T11:19:00Z",
            "lastStatusCode": 503,
            "endpoint": "https://example.com/health",
            "httpmethod": "GET",
            "succeeded": "error"
        }"#;

        let execution: JobExecution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.id, 31);
        assert_eq!(execution.job_id, 7);
        assert_eq!(execution.last_status_code, 503);
        assert_eq!(execution.succeeded, "error");
        assert_eq!(
            Timestamp::display_option(&execution.last_response_at),
            "2023-12-01T11:19:00Z"
        );
    }
}
