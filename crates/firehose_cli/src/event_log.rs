//! Parsing of recorded event logs.
//!
//! One event per line, in the form the analysis tool prints them:
//! `NOTE: text`, `WARNING: text`, `WARNING ONCE: text`,
//! `WARNING ONCE [origin]: text` or `ERROR: text`, optionally behind a tool
//! tag such as `KLEE: `. Any other non-blank line is a plain message.

use firehose_diagnostics::{Event, Origin, Severity, WARNING_ONCE_PREFIX};

const SEVERITIES: [Severity; 3] = [Severity::Note, Severity::Warning, Severity::Error];

/// Parses every line of `content`. "Warn once" lines without an explicit
/// origin are keyed by `source`.
pub fn parse_log(content: &str, source: &str) -> Vec<Event> {
    let fallback = Origin::named(source);
    content
        .lines()
        .filter_map(|line| parse_line(line, &fallback))
        .collect()
}

/// Parses one line, or returns `None` for a blank line.
pub fn parse_line(line: &str, fallback: &Origin) -> Option<Event> {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return None;
    }
    let body = strip_tool_tag(line);

    if let Some(rest) = body.strip_prefix(WARNING_ONCE_PREFIX) {
        if let Some(text) = rest.strip_prefix(": ") {
            return Some(Event::warning_once(fallback.clone(), text));
        }
        if let Some((origin, text)) = rest.strip_prefix(" [").and_then(|r| r.split_once("]: ")) {
            return Some(Event::warning_once(Origin::named(origin), text));
        }
    }

    let event = SEVERITIES
        .iter()
        .find_map(|&severity| {
            let text = body
                .strip_prefix(severity.prefix()?)?
                .strip_prefix(": ")?;
            Some(Event::new(severity, text))
        })
        .unwrap_or_else(|| Event::message(body));
    Some(event)
}

/// Drops a leading `TOOL: ` tag that is not itself a severity.
fn strip_tool_tag(line: &str) -> &str {
    match line.split_once(": ") {
        Some((tag, rest)) if is_tool_tag(tag) => rest,
        _ => line,
    }
}

fn is_tool_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
        && !SEVERITIES.iter().any(|s| s.prefix() == Some(tag))
}
