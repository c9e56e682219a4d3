//! Embedded-JSON extraction from surrounding prose.

use regex::Regex;
use std::sync::LazyLock;

/// Fenced code block tagged as JSON: ```json ... ```
static FENCED_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("static regex must compile")
});

/// Locates the most plausible JSON fragment embedded in `text`.
///
/// Patterns are tried in precedence order and the first match wins: a
/// fenced ```json block, then the span from the first `{` to the last `}`,
/// then the span from the first `[` to the last `]`. Returns `None` when
/// none of the patterns match; the returned slice is not guaranteed to be
/// well-formed JSON.
pub(crate) fn embedded_json(text: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON_RE.captures(text) {
        return caps.get(1).map(|m| m.as_str());
    }
    delimited_span(text, '{', '}').or_else(|| delimited_span(text, '[', ']'))
}

fn delimited_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..end + close.len_utf8()])
}
