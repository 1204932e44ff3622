//! Execution paths leading to an issue.

use crate::location::Location;
use crate::markup::{element, ToMarkup};
use crate::text::Notes;
use serde::Serialize;

/// One step of an execution trace.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct State {
    /// Where execution was at this step.
    pub location: Location,
    /// Optional commentary on this step.
    pub notes: Option<Notes>,
}

impl State {
    /// Creates a state without notes.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            notes: None,
        }
    }

    /// Attaches notes to this state.
    pub fn with_notes(mut self, notes: impl Into<Notes>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl ToMarkup for State {
    fn to_markup(&self) -> String {
        let location = self.location.to_markup();
        let notes = self.notes.to_markup();
        if location.is_empty() && notes.is_empty() {
            return String::new();
        }
        element("<state>", "state", [location, notes])
    }
}

/// An ordered execution path.
///
/// A present trace with no states still renders its element; leave the
/// trace out of an [`Issue`](crate::Issue) entirely to omit it.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub struct Trace {
    /// The states in execution order.
    pub states: Vec<State>,
}

impl Trace {
    /// Creates a trace from states in execution order.
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// Returns the states in execution order.
    pub fn states(&self) -> &[State] {
        &self.states
    }
}

impl FromIterator<State> for Trace {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ToMarkup for Trace {
    fn to_markup(&self) -> String {
        element(
            "<trace>",
            "trace",
            self.states.iter().map(ToMarkup::to_markup),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{File, Function, Point, Range};

    fn state1() -> State {
        State::new(Location::with_range(
            File::new("a/b/c"),
            Function::new("f1"),
            Range::new(Point::new(120, 0), Point::new(150, 0)),
        ))
    }

    fn state3() -> State {
        State::new(Location::new(File::new("Test.c"), Function::new("Test1"), None))
            .with_notes("Function call: Test1(name=22974400)")
    }

    #[test]
    fn state_without_notes() {
        let s = state1();
        assert!(s.notes.is_none());
        assert_eq!(
            s.to_markup(),
            format!("<state>\n{}\n</state>", s.location.to_markup())
        );
    }

    #[test]
    fn state_with_notes() {
        let s = state3();
        assert_eq!(
            s.to_markup(),
            format!(
                "<state>\n{}\n<notes>Function call: Test1(name=22974400)</notes>\n</state>",
                s.location.to_markup()
            )
        );
        assert_ne!(s, state1());
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(State::default().to_markup(), "");
    }

    #[test]
    fn empty_trace_keeps_element() {
        assert_eq!(Trace::default().to_markup(), "<trace>\n</trace>");
        assert_eq!(None::<Trace>.to_markup(), "");
    }

    #[test]
    fn trace_keeps_state_order() {
        let trace: Trace = vec![state1(), state3()].into_iter().collect();
        assert_eq!(trace.states().len(), 2);
        let xml = trace.to_markup();
        let first = xml.find("a/b/c").unwrap();
        let second = xml.find("Test.c").unwrap();
        assert!(first < second);
        assert!(xml.starts_with("<trace>\n<state>"));
        assert!(xml.ends_with("</state>\n</trace>"));
    }
}
