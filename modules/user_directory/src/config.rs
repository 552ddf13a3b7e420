use serde::{Deserialize, Serialize};

use crate::domain::view_state::DEFAULT_ITEMS_PER_PAGE;

/// Configuration for the user_directory module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDirectoryConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for UserDirectoryConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}
