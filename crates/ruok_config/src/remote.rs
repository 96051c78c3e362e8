use crate::definitions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuokRemoteServerConfig {
    #[serde(rename = "server")]
    pub name: String,
    pub host: String,
    pub port: i64,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RuokRemoteServerConfig {
    /// Checks the value of the tls field and returns the appropriate form
    /// of the http protocol to be used, either http or https.
    pub fn http_protocol(&self) -> String {
        if self.tls {
            "https".to_string()
        } else {
            "http".to_string()
        }
    }

    pub fn base_url_http(&self) -> String {
        format!("{}://{}:{}", self.http_protocol(), self.host, self.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for RuokRemoteServerConfig {
    fn default() -> Self {
        Self {
            name: definitions::REMOTE_SERVER_NAME.to_string(),
            host: definitions::REMOTE_SERVER_HOST.to_string(),
            port: definitions::REMOTE_SERVER_PORT,
            tls: false,
            timeout_secs: Some(definitions::REMOTE_SERVER_TIMEOUT_SECS),
        }
    }
}
