use super::{common::null_as_default, execution::JobExecution, job::Job};
use serde::{Deserialize, Serialize};

/// Total count the server reports when it does not know how many items exist.
pub const UNKNOWN_TOTAL: i64 = -1;

fn unknown_total() -> i64 {
    UNKNOWN_TOTAL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQueryParams {
    pub limit: u64,
    pub offset: u64,
}

impl PageQueryParams {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListJobsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,

    #[serde(rename = "claimedJobs", default = "unknown_total")]
    pub claimed_jobs: i64,

    #[serde(default)]
    pub limit: Option<u64>,

    #[serde(default)]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListJobResultsResponse {
    #[serde(rename = "jobResults", default, deserialize_with = "null_as_default")]
    pub job_results: Vec<JobExecution>,
}
