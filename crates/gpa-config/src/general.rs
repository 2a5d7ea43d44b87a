//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_banner() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Print the start-up banner before the main menu.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
        }
    }
}
