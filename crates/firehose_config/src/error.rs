//! Errors raised while reading `firehose.toml`.

use std::path::PathBuf;

/// Why a `firehose.toml` could not be turned into a [`ReportConfig`](crate::ReportConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected tables.
    #[error("malformed firehose.toml: {0}")]
    Malformed(String),

    /// A generator field that report metadata cannot do without is empty.
    #[error("`{0}` must not be empty: reports need a generator identity")]
    MissingGenerator(&'static str),

    /// `report.output` is set but names no file.
    #[error("`report.output` is set but empty; remove it to print the report instead")]
    EmptyOutputPath,
}
