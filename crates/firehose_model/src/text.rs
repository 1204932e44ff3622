//! Free-text payloads: user-facing messages and trace notes.

use crate::markup::{escape_text, ToMarkup};
use serde::Serialize;

/// The user-facing text of a diagnostic.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Message(String);

impl Message {
    /// Creates a message from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl ToMarkup for Message {
    fn to_markup(&self) -> String {
        text_element("message", &self.0)
    }
}

/// Commentary attached to one [`State`](crate::State) of a trace.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Notes(String);

impl Notes {
    /// Creates notes from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the notes text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Notes {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Notes {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl ToMarkup for Notes {
    fn to_markup(&self) -> String {
        text_element("notes", &self.0)
    }
}

/// `<name>text</name>`, or nothing for empty text.
fn text_element(name: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("<{name}>{}</{name}>", escape_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_markup() {
        let msg = Message::new("Out of memory");
        assert_eq!(msg.text(), "Out of memory");
        assert_eq!(msg.to_markup(), "<message>Out of memory</message>");
    }

    #[test]
    fn notes_markup() {
        let notes = Notes::from("Function call: f(a=3, b=7)");
        assert_eq!(
            notes.to_markup(),
            "<notes>Function call: f(a=3, b=7)</notes>"
        );
    }

    #[test]
    fn empty_text_renders_nothing() {
        assert_eq!(Message::default().to_markup(), "");
        assert_eq!(Notes::default().to_markup(), "");
    }

    #[test]
    fn text_is_escaped() {
        let msg = Message::from(String::from("a < b"));
        assert_eq!(msg.to_markup(), "<message>a &lt; b</message>");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Message::new("hi")).unwrap();
        assert_eq!(json, "\"hi\"");
    }
}
