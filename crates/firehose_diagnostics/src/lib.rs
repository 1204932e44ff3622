//! Diagnostic classification, "warn once" suppression, and report assembly.
//!
//! Events from the analysis enter a [`Reporter`], which [`classify`]s their
//! text into a stable [`Taxonomy`](firehose_model::Taxonomy) identifier, drops
//! repeated "warn once" events through its [`OnceFilter`], and turns the rest
//! into failures and infos. Findings are streamed to an optional
//! [`ReportWriter`] and collected into the report tree.

#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod event;
pub mod once;
pub mod origin;
pub mod reporter;
pub mod severity;
pub mod writer;

pub use classify::classify;
pub use error::ReportError;
pub use event::{Event, WARNING_ONCE_PREFIX};
pub use once::OnceFilter;
pub use origin::Origin;
pub use reporter::{ReportSettings, Reporter};
pub use severity::Severity;
pub use writer::ReportWriter;
