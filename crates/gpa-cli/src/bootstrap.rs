use std::ffi::OsString;
use std::path::Path;

use anyhow::Context;
use gpa_config::{ENV_PREFIX, GpaConfig, SECTIONS};

/// Env var read by the tracing subscriber, not by figment.
pub const LOG_ENV: &str = "GPA_LOG";

/// Load `<dir>/.env` into the process environment when it exists.
///
/// Runs before tracing is initialised so a `GPA_LOG` in `.env` takes effect.
pub fn load_project_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

/// Load layered configuration and warn about mistyped keys.
pub fn load_config() -> anyhow::Result<GpaConfig> {
    let config = GpaConfig::load()?;
    for warning in collect_unrecognized_env_warnings(std::env::vars_os()) {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

/// `GPA_*` keys that figment will silently ignore because they name no section.
///
/// Keys that are not valid Unicode cannot name a config field and are skipped.
fn collect_unrecognized_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut keys = env
        .into_iter()
        .filter_map(|(key, _)| key.into_string().ok())
        .filter(|key| key.starts_with(ENV_PREFIX) && key != LOG_ENV)
        .filter(|key| !names_known_section(&key[ENV_PREFIX.len()..]))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            format!(
                "{key} does not match any config section and is ignored. Use double underscores (example: GPA_REPORT__NAME_WIDTH)."
            )
        })
        .collect()
}

fn names_known_section(rest: &str) -> bool {
    rest.split_once("__").is_some_and(|(section, field)| {
        !field.is_empty()
            && SECTIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(section))
    })
}
