use super::common::Timestamp;
use serde::{Deserialize, Serialize};

pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
pub const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceInfo {
    pub app_name: String,
    pub db_connected: bool,
    #[serde(rename = "dbURL")]
    pub db_url: String,
    pub tls_active: bool,
    pub tls_version: String,
    pub started_at_micro: i64,
    pub up_time_micro: i64,
    pub claimed_jobs: i64,
    pub max_jobs: i64,
}

impl InstanceInfo {
    pub fn started_at(&self) -> Timestamp {
        Timestamp::Micros(self.started_at_micro)
    }

    pub fn display_uptime(&self) -> String {
        format_uptime(self.up_time_micro)
    }

    pub fn display_or_unknown(value: &str) -> String {
        if value.is_empty() {
            "unknown".to_string()
        } else {
            value.to_string()
        }
    }
}

pub fn format_uptime(micros: i64) -> String {
    let micros = micros.max(0);
    let hours = micros / MICROS_PER_HOUR;
    let minutes = (micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE;
    let seconds = (micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND;
    format!("{hours} h - {minutes} m - {seconds} s")
}
