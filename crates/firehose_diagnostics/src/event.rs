//! Diagnostic events as they arrive from the analysis.

use crate::origin::Origin;
use crate::severity::Severity;
use std::fmt;

/// Line prefix of a warning that is reported once per origin.
pub const WARNING_ONCE_PREFIX: &str = "WARNING ONCE";

/// One diagnostic event: a severity, the fully formatted text, and for
/// "warn once" events the origin used to suppress repeats.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Event {
    /// The severity of this event.
    pub severity: Severity,
    /// The fully formatted message text.
    pub text: String,
    /// Set for warnings that are reported once per origin.
    pub origin: Option<Origin>,
}

impl Event {
    /// Creates an event of the given severity.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            origin: None,
        }
    }

    /// Creates a plain message event.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(Severity::Message, text)
    }

    /// Creates a note event.
    pub fn note(text: impl Into<String>) -> Self {
        Self::new(Severity::Note, text)
    }

    /// Creates a warning event.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates a warning that is reported only once per `origin`.
    pub fn warning_once(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
            origin: Some(origin),
        }
    }

    /// Creates an error event.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Returns `true` for "warn once" events.
    pub fn is_once(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns the line prefix of this event, if it has one.
    pub fn prefix(&self) -> Option<&'static str> {
        if self.is_once() {
            Some(WARNING_ONCE_PREFIX)
        } else {
            self.severity.prefix()
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => write!(f, "{prefix}: {}", self.text),
            None => f.write_str(&self.text),
        }
    }
}
