//! Locating and loading `firehose.toml` for the CLI.

use std::path::Path;

use firehose_config::{load_config, ConfigError, ReportConfig, CONFIG_FILE_NAME};
use log::debug;

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, or `firehose.toml` from the
/// current directory, or the defaults if neither exists.
pub fn load(global: &GlobalArgs) -> Result<ReportConfig, ConfigError> {
    let config = resolve(global.config.as_deref().map(Path::new), Path::new("."))?;
    if global.verbose {
        eprintln!(
            "   Generator {} v{}",
            config.generator.name, config.generator.version
        );
    }
    Ok(config)
}

/// Loads `explicit` if given. Otherwise looks for `firehose.toml` in `dir`.
fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<ReportConfig, ConfigError> {
    if let Some(path) = explicit {
        debug!(path:? = path; "Loading configuration");
        return load_config(path);
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!(path:? = candidate; "Loading configuration");
        load_config(&candidate)
    } else {
        debug!("No configuration file, using defaults");
        Ok(ReportConfig::default())
    }
}
