//! # gpa-config
//!
//! Layered configuration loading for the calculator using figment.
//!
//! Only presentation preferences are configurable. The grading scale, the
//! activity requirement and the curriculum are fixed.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GPA_*` prefix, `__` as separator)
//! 2. Project-level `.gpa/config.toml`
//! 3. User-level `~/.config/gpa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GPA_REPORT__NAME_WIDTH` -> `report.name_width`,
//! `GPA_GENERAL__BANNER` -> `general.banner`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gpa_config::GpaConfig;
//!
//! let config = GpaConfig::load().expect("config");
//! println!("subject column: {}", config.report.name_width);
//! ```

mod error;
mod general;
mod report;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use report::{ColorChoice, NAME_WIDTH_RANGE, ReportConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "GPA_";

/// Top-level config sections; env keys must start with one of these after the prefix.
pub const SECTIONS: [&str; 2] = ["general", "report"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GpaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl GpaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; the binary loads it before tracing starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.report.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gpa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gpa").join("config.toml"))
    }
}
