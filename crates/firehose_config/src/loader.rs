//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::Path;

/// File name looked up when no configuration path is given explicitly.
pub const CONFIG_FILE_NAME: &str = "firehose.toml";

/// Loads and validates a `firehose.toml` configuration from `path`.
pub fn load_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `firehose.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.generator.name.trim().is_empty() {
        return Err(ConfigError::MissingGenerator("generator.name"));
    }
    if config.generator.version.trim().is_empty() {
        return Err(ConfigError::MissingGenerator("generator.version"));
    }
    if let Some(output) = &config.report.output {
        if output.trim().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
    }
    Ok(())
}
