//! The complete report document and its provenance.

use crate::markup::{element, escape_attr, ToMarkup};
use crate::result::{ResultType, Results};
use serde::Serialize;

/// Identity of the tool that produced the report.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Generator {
    /// Tool name.
    pub name: String,
    /// Tool version.
    pub version: String,
}

impl Generator {
    /// Creates a generator identity.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl ToMarkup for Generator {
    fn to_markup(&self) -> String {
        if self.name.is_empty() && self.version.is_empty() {
            return String::new();
        }
        format!(
            "<generator name=\"{}\" version=\"{}\"/>",
            escape_attr(&self.name),
            escape_attr(&self.version)
        )
    }
}

/// Report provenance.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Metadata {
    /// The tool that produced the report.
    pub generator: Generator,
}

impl Metadata {
    /// Creates metadata for the given generator.
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }
}

impl ToMarkup for Metadata {
    fn to_markup(&self) -> String {
        let generator = self.generator.to_markup();
        if generator.is_empty() {
            return String::new();
        }
        element("<metadata>", "metadata", [generator])
    }
}

/// A complete report: metadata followed by results.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Analysis {
    /// Report provenance.
    pub metadata: Metadata,
    /// The findings, in discovery order.
    pub results: Results,
}

impl Analysis {
    /// Creates a report.
    pub fn new(metadata: Metadata, results: Results) -> Self {
        Self { metadata, results }
    }

    /// Appends a finding to the results.
    pub fn push(&mut self, entry: impl Into<ResultType>) {
        self.results.push(entry);
    }
}

impl ToMarkup for Analysis {
    fn to_markup(&self) -> String {
        element(
            "<analysis>",
            "analysis",
            [self.metadata.to_markup(), self.results.to_markup()],
        )
    }
}
