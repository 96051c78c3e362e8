use super::common::{ListedMethod, Timestamp, null_as_default};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    pub endpoint: String,

    #[serde(rename = "httpmethod")]
    pub method: ListedMethod,

    #[serde(rename = "cronexp")]
    pub cron_expression: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub success_statuses: Vec<u16>,

    #[serde(default)]
    pub max_retries: u32,

    #[serde(rename = "lastExecution", default)]
    pub last_execution_at: Option<Timestamp>,

    #[serde(rename = "shouldExecuteAt", default)]
    pub next_execution_at: Option<Timestamp>,

    #[serde(default)]
    pub created_at: Option<Timestamp>,

    #[serde(rename = "succeeded", default, deserialize_with = "null_as_default")]
    pub last_status: String,
}

impl Job {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("-")
    }

    pub fn display_success_statuses(&self) -> String {
        self.success_statuses
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}
