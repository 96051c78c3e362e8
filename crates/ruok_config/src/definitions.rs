pub const VERSION: &str = "0.1";
pub const TOOL_DIR: &str = ".ruok";
pub const TOOL_DEFAULT_CONFIG: &str = "config";
pub const TOOL_DEFAULT_CONFIG_FILE: &str = "config.yaml";

pub const REMOTE_SERVER_NAME: &str = "local";
pub const REMOTE_SERVER_HOST: &str = "127.0.0.1";
pub const REMOTE_SERVER_PORT: i64 = 8080;
pub const REMOTE_SERVER_TIMEOUT_SECS: u64 = 10;

pub const UI_PAGE_SIZE: u64 = 10;

pub fn default_client_config() -> String {
    format!(
        r"remote:
    - server: {REMOTE_SERVER_NAME}
      host: {REMOTE_SERVER_HOST}
      port: {REMOTE_SERVER_PORT}
      tls: false
      timeout-secs: {REMOTE_SERVER_TIMEOUT_SECS}
ui:
    page-size: {UI_PAGE_SIZE}"
    )
}
