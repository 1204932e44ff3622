//! Configuration types deserialized from `firehose.toml`.

use serde::Deserialize;

/// The top-level report configuration parsed from `firehose.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// The tool identity written into report metadata.
    pub generator: GeneratorConfig,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportSection,
}

/// Name and version of the tool the reported diagnostics come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// The tool name.
    pub name: String,
    /// The tool version string.
    pub version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: "firehose".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Settings for the produced report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSection {
    /// Also collect failures and infos into the results block of the report
    /// tree, not only issues.
    #[serde(default)]
    pub aggregate_events: bool,
    /// Default path of the streamed report document.
    #[serde(default)]
    pub output: Option<String>,
    /// Output format of the final report tree.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format of the report tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested markup.
    #[default]
    Xml,
    /// JSON, for consumers that prefer it.
    Json,
}
