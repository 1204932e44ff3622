//! Parsing and validation of `firehose.toml` report configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`ReportConfig`] naming the generator that appears in report metadata and
//! the options of the report output.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
