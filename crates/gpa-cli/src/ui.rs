use gpa_config::{ColorChoice, GpaConfig};

use crate::cli::GlobalFlags;

/// Presentation preferences resolved from flags, config and the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub name_width: usize,
    pub banner: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            table_color: false,
            name_width: GpaConfig::default().report.name_width,
            banner: true,
        }
    }
}

impl UiPrefs {
    /// Flags win over config; `auto` colour needs a terminal and no `NO_COLOR`.
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, config: &GpaConfig, is_tty: bool, no_color: bool) -> Self {
        let choice = flags.color.map_or(config.report.color, ColorChoice::from);
        let table_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_tty && !no_color && !flags.quiet,
        };

        Self {
            table_color,
            name_width: config.report.name_width,
            banner: config.general.banner && !flags.no_banner && !flags.quiet,
        }
    }
}
