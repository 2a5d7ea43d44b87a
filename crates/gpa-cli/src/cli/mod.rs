use clap::Parser;

pub mod global;

pub use global::{ColorMode, GlobalFlags};

/// Top-level CLI parser for the `gpa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gpa",
    version,
    about = "Interactive SGPA / CGPA calculator for the CE, ME, EEE, ECE and CS curricula"
)]
pub struct Cli {
    /// Quiet mode (errors only in logs, no start-up banner)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Colour report tables: auto, always, never (overrides config)
    #[arg(long)]
    pub color: Option<ColorMode>,

    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for start-up code.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            no_banner: self.no_banner,
        }
    }
}
