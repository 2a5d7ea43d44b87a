//! Semester report presentation settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Narrowest and widest allowed subject-name column.
pub const NAME_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 10..=80;

const fn default_name_width() -> usize {
    28
}

/// When to emit ANSI colour in report tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Subject names longer than this are truncated in the report table.
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    #[serde(default)]
    pub color: ColorChoice,
}

impl ReportConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `name_width` is outside
    /// [`NAME_WIDTH_RANGE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if NAME_WIDTH_RANGE.contains(&self.name_width) {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "report.name_width".to_string(),
            reason: format!(
                "{} is outside {}-{}",
                self.name_width,
                NAME_WIDTH_RANGE.start(),
                NAME_WIDTH_RANGE.end()
            ),
        })
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name_width: default_name_width(),
            color: ColorChoice::default(),
        }
    }
}
