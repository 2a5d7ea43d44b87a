use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use gpa_core::session::Session;

mod bootstrap;
mod cli;
mod menu;
mod output;
mod prompt;
mod report;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("gpa error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    bootstrap::load_project_dotenv(&cwd)?;
    init_tracing(&flags)?;

    let config = bootstrap::load_config().context("failed to load gpa configuration")?;

    let stdout = io::stdout();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let prefs = ui::UiPrefs::resolve(&flags, &config, stdout.is_terminal(), no_color);

    let curriculum =
        gpa_curriculum::published().context("embedded curriculum failed to load")?;
    let session = Session::new(curriculum);

    let stdin = io::stdin();
    let prompter = prompt::Prompter::new(stdin.lock(), stdout.lock());
    menu::Driver::new(session, prompter, prefs).run()
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(bootstrap::LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
