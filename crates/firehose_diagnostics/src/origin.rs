//! Call-site identities used to key "warn once" diagnostics.

use std::fmt;

/// An opaque identity for the place a warning comes from.
///
/// Two warnings with the same text but different origins are reported
/// separately. The origin says nothing about the message content.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Origin {
    /// A source location captured with `#[track_caller]`.
    CallSite {
        /// Source file of the call.
        file: &'static str,
        /// Line of the call.
        line: u32,
        /// Column of the call.
        column: u32,
    },
    /// A token chosen by the caller.
    Named(String),
}

impl Origin {
    /// Returns the origin of the code that called this function.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Origin::CallSite {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Creates an origin from a caller-chosen token.
    pub fn named(token: impl Into<String>) -> Self {
        Origin::Named(token.into())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::CallSite { file, line, column } => write!(f, "{file}:{line}:{column}"),
            Origin::Named(token) => f.write_str(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_distinguishes_call_sites() {
        let a = Origin::caller();
        let b = Origin::caller();
        assert_ne!(a, b);
    }

    #[test]
    fn caller_is_stable_in_a_loop() {
        let origins: Vec<_> = (0..3).map(|_| Origin::caller()).collect();
        assert_eq!(origins[0], origins[1]);
        assert_eq!(origins[1], origins[2]);
    }

    #[test]
    fn caller_points_at_this_file() {
        match Origin::caller() {
            Origin::CallSite { file, .. } => assert!(file.ends_with("origin.rs")),
            Origin::Named(_) => panic!("expected a call site"),
        }
    }

    #[test]
    fn named_origins() {
        assert_eq!(Origin::named("loop"), Origin::Named("loop".to_string()));
        assert_ne!(Origin::named("a"), Origin::named("b"));
        assert_eq!(format!("{}", Origin::named("events.log")), "events.log");
    }
}
