//! Report findings: issues, failures, infos, and the ordered result set.

use crate::location::Location;
use crate::markup::{element, escape_attr, ToMarkup};
use crate::taxonomy::{FailureKind, Taxonomy};
use crate::text::Message;
use crate::trace::Trace;
use serde::Serialize;

/// A located defect, optionally with the execution path that reached it.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Issue {
    /// What went wrong.
    pub message: Message,
    /// Where it went wrong.
    pub location: Location,
    /// How execution got there.
    pub trace: Option<Trace>,
}

impl Issue {
    /// Creates an issue without a trace.
    pub fn new(message: impl Into<Message>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
            trace: None,
        }
    }

    /// Attaches a trace to this issue.
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.trace = Some(trace);
        self
    }
}

impl ToMarkup for Issue {
    fn to_markup(&self) -> String {
        let message = self.message.to_markup();
        let location = self.location.to_markup();
        if message.is_empty() && location.is_empty() && self.trace.is_none() {
            return String::new();
        }
        element(
            "<issue>",
            "issue",
            [message, location, self.trace.to_markup()],
        )
    }
}

/// The payload shared by failures and infos: an identifier and a message.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Finding<Id> {
    /// The taxonomy identifier.
    pub id: Id,
    /// The diagnostic text.
    pub message: Message,
}

impl<Id> Finding<Id> {
    /// Creates a finding.
    pub fn new(id: Id, message: impl Into<Message>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// A hard failure of the analysis, identified by a [`FailureKind`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Failure {
    /// Identifier and message.
    #[serde(flatten)]
    pub finding: Finding<FailureKind>,
    /// Where the failure happened, if known.
    pub location: Option<Location>,
}

impl Failure {
    /// Creates a failure without a location.
    pub fn new(kind: FailureKind, message: impl Into<Message>) -> Self {
        Self {
            finding: Finding::new(kind, message),
            location: None,
        }
    }

    /// Attaches a location to this failure.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> FailureKind {
        self.finding.id
    }

    /// Returns the failure message.
    pub fn message(&self) -> &Message {
        &self.finding.message
    }
}

impl ToMarkup for Failure {
    fn to_markup(&self) -> String {
        let location = self.location.to_markup();
        let message = self.message().to_markup();
        if location.is_empty() && message.is_empty() {
            return String::new();
        }
        let open = format!(
            "<failure failure-id=\"{}\">",
            escape_attr(self.kind().as_str())
        );
        element(&open, "failure", [location, message])
    }
}

/// An informational finding. Infos never carry a location.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Info {
    /// Identifier and message.
    #[serde(flatten)]
    pub finding: Finding<Taxonomy>,
}

impl Info {
    /// Creates an info.
    pub fn new(id: Taxonomy, message: impl Into<Message>) -> Self {
        Self {
            finding: Finding::new(id, message),
        }
    }

    /// Returns the taxonomy identifier.
    pub fn id(&self) -> Taxonomy {
        self.finding.id
    }

    /// Returns the info message.
    pub fn message(&self) -> &Message {
        &self.finding.message
    }
}

impl ToMarkup for Info {
    fn to_markup(&self) -> String {
        let message = self.message().to_markup();
        if message.is_empty() {
            return String::new();
        }
        let open = format!("<info info-id=\"{}\">", escape_attr(self.id().as_str()));
        element(&open, "info", [message])
    }
}

/// One entry of a result set.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultType {
    /// A located defect.
    Issue(Issue),
    /// A hard failure.
    Failure(Failure),
    /// An informational finding.
    Info(Info),
}

impl ResultType {
    /// Returns the issue, if this entry is one.
    pub fn as_issue(&self) -> Option<&Issue> {
        match self {
            ResultType::Issue(issue) => Some(issue),
            _ => None,
        }
    }
}

impl From<Issue> for ResultType {
    fn from(issue: Issue) -> Self {
        ResultType::Issue(issue)
    }
}

impl From<Failure> for ResultType {
    fn from(failure: Failure) -> Self {
        ResultType::Failure(failure)
    }
}

impl From<Info> for ResultType {
    fn from(info: Info) -> Self {
        ResultType::Info(info)
    }
}

impl ToMarkup for ResultType {
    fn to_markup(&self) -> String {
        match self {
            ResultType::Issue(issue) => issue.to_markup(),
            ResultType::Failure(failure) => failure.to_markup(),
            ResultType::Info(info) => info.to_markup(),
        }
    }
}

/// The ordered findings of a report.
///
/// Entries keep insertion order, which is the order in which they were
/// discovered. The set only grows.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Results {
    entries: Vec<ResultType>,
}

impl Results {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result set holding the given issues in order.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            entries: issues.into_iter().map(ResultType::Issue).collect(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: impl Into<ResultType>) {
        self.entries.push(entry.into());
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[ResultType] {
        &self.entries
    }

    /// Iterates over the issues only, in insertion order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.entries.iter().filter_map(ResultType::as_issue)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ToMarkup for Results {
    fn to_markup(&self) -> String {
        element(
            "<results>",
            "results",
            self.entries.iter().map(ToMarkup::to_markup),
        )
    }
}
