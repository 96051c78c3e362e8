use crate::definitions;
use serde::{Deserialize, Serialize};

fn default_page_size() -> u64 {
    definitions::UI_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuokUiConfig {
    /// Initial rows per page for every paginated list. Must be one of the
    /// page size options the browser accepts, otherwise the default is used.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for RuokUiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
