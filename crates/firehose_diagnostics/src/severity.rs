//! Diagnostic severity levels ordered from least to most severe.

use serde::Serialize;
use std::fmt;

/// The severity level of a diagnostic event.
///
/// Ordered from least severe (`Message`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A plain progress message. Never reported.
    Message,
    /// An informational note.
    Note,
    /// A potential problem worth reviewing.
    Warning,
    /// A problem that stops the analysis.
    Error,
}

impl Severity {
    /// Returns `true` if events of this severity end up in the report.
    pub fn is_reported(self) -> bool {
        self != Severity::Message
    }

    /// Returns the line prefix used for this severity, if any.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Severity::Message => None,
            Severity::Note => Some("NOTE"),
            Severity::Warning => Some("WARNING"),
            Severity::Error => Some("ERROR"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Message => write!(f, "message"),
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Message < Severity::Note);
        assert!(Severity::Note < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn only_plain_messages_are_unreported() {
        assert!(!Severity::Message.is_reported());
        assert!(Severity::Note.is_reported());
        assert!(Severity::Warning.is_reported());
        assert!(Severity::Error.is_reported());
    }

    #[test]
    fn prefixes() {
        assert_eq!(Severity::Message.prefix(), None);
        assert_eq!(Severity::Note.prefix(), Some("NOTE"));
        assert_eq!(Severity::Warning.prefix(), Some("WARNING"));
        assert_eq!(Severity::Error.prefix(), Some("ERROR"));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Note), "note");
        assert_eq!(format!("{}", Severity::Message), "message");
    }
}
