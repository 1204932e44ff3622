//! Report value model and markup serialization.
//!
//! This crate holds the immutable values a diagnostic report is built from
//! ([`Point`], [`Location`], [`Trace`], ...), the report tree itself
//! ([`Issue`], [`Failure`], [`Info`], [`Results`], [`Analysis`]) and the
//! [`ToMarkup`] trait that renders any node as nested markup. Optional parts
//! of a node are plain `Option`s; an absent part renders nothing and never
//! leaves an empty element or a blank line behind.

#![warn(missing_docs)]

pub mod analysis;
pub mod location;
pub mod markup;
pub mod result;
pub mod taxonomy;
pub mod text;
pub mod trace;

pub use analysis::{Analysis, Generator, Metadata};
pub use location::{Anchor, File, Function, Location, Point, Range};
pub use markup::{join_nonempty, ToMarkup, SEPARATOR};
pub use result::{Failure, Finding, Info, Issue, ResultType, Results};
pub use taxonomy::{FailureKind, ResultClass, Taxonomy, UnsanctionedFailure};
pub use text::{Message, Notes};
pub use trace::{State, Trace};
