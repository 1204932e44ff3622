//! Markup serialization shared by every report node.

/// Separator placed between the rendered children of a composite element.
pub const SEPARATOR: &str = "\n";

/// Trait for rendering a report node into its markup text.
///
/// Rendering is pure and deterministic: equal nodes always produce identical
/// output. A node that carries nothing worth reporting renders the empty
/// string, and composites drop such children instead of leaving blank lines.
pub trait ToMarkup {
    /// Renders this node as markup.
    fn to_markup(&self) -> String;
}

impl<T: ToMarkup> ToMarkup for Option<T> {
    fn to_markup(&self) -> String {
        self.as_ref().map(ToMarkup::to_markup).unwrap_or_default()
    }
}

/// Joins the non-empty parts with `sep`, dropping empty parts entirely.
pub fn join_nonempty<I, S>(parts: I, sep: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(part);
    }
    out
}

/// Wraps the rendered children between an opening and a closing tag.
///
/// `open` is the full opening tag including any attributes, `name` is the
/// element name used for the closing tag.
pub(crate) fn element<I>(open: &str, name: &str, children: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let close = format!("</{name}>");
    let parts = std::iter::once(open.to_string())
        .chain(children)
        .chain(std::iter::once(close));
    join_nonempty(parts, SEPARATOR)
}

/// Escapes text content (`&`, `<`, `>`).
pub fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escapes an attribute value (`&`, `<`, `>`, `"`).
pub fn escape_attr(value: &str) -> String {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
