pub mod definitions;
mod remote;
mod ui;

pub use remote::*;
pub use ui::*;

use anyhow::{Error, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(feature = "tokio")]
use tracing::debug;

pub fn err_server_not_in_config() -> Error {
    anyhow!("server not found in config")
}

pub fn err_no_server_in_config() -> Error {
    anyhow!("no server found in config")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuokConfig {
    #[serde(default)]
    pub remote: Vec<RuokRemoteServerConfig>,

    #[serde(default)]
    pub ui: RuokUiConfig,
}

impl Default for RuokConfig {
    fn default() -> Self {
        Self {
            remote: vec![RuokRemoteServerConfig::default()],
            ui: RuokUiConfig::default(),
        }
    }
}

impl RuokConfig {
    pub fn path() -> Result<PathBuf> {
        let mut path = std::env::current_dir()?;
        path.push(definitions::TOOL_DIR);
        path.push(definitions::TOOL_DEFAULT_CONFIG_FILE);
        Ok(path)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| anyhow!(e))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| anyhow!(e))
    }

    /// Loads the configuration from the tool directory of the current
    /// working directory, falling back to the defaults when no file exists.
    #[cfg(feature = "tokio")]
    pub async fn load() -> Result<Self> {
        let path = Self::path()?;
        if !tokio::fs::try_exists(&path).await? {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        debug!("loading config file from: {}", path.display());
        let content = tokio::fs::read_to_string(&path).await?;
        Self::from_yaml(&content)
    }

    pub fn server(&self, name: &str) -> Result<&RuokRemoteServerConfig> {
        self.remote
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(err_server_not_in_config)
    }

    pub fn nth_server(&self, i: usize) -> Result<&RuokRemoteServerConfig> {
        self.remote.get(i).ok_or_else(err_no_server_in_config)
    }

    pub fn server_or_first(&self, name: Option<&str>) -> Result<&RuokRemoteServerConfig> {
        match name {
            Some(name) => self.server(name),
            None => self.nth_server(0),
        }
    }
}
