use clap::ValueEnum;
use gpa_config::ColorChoice;

/// Colour override accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::Auto,
            ColorMode::Always => Self::Always,
            ColorMode::Never => Self::Never,
        }
    }
}

/// Global flags handed to start-up code.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
    pub color: Option<ColorMode>,
    pub no_banner: bool,
}
