use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse all whitespace runs to one space. Used for diagnostics, never for
/// stored values.
pub fn normalize_text(input: &str) -> String {
    WHITESPACE_RE
        .replace_all(input.trim(), " ")
        .trim()
        .to_string()
}

pub fn require<'a, 'buf>(
    element: Option<Element<'a, 'buf>>,
    section: &'static str,
) -> Result<Element<'a, 'buf>, ExtractError> {
    element.ok_or(ExtractError::MissingSection { section })
}

/// Header (`th`) and value (`td`) cells of a table row.
pub fn row_cells<'a, 'buf>(
    row: &Element<'a, 'buf>,
) -> (Vec<Element<'a, 'buf>>, Vec<Element<'a, 'buf>>) {
    (
        row.find_all(Selector::tag("th")),
        row.find_all(Selector::tag("td")),
    )
}

/// Flattened row text, kept in errors so a failing layout can be diagnosed.
pub fn row_context(row: &Element<'_, '_>) -> String {
    normalize_text(&row.text())
}

/// Text of the first `span` inside the first `h3` of `section`.
pub fn heading_span_text(section: &Element<'_, '_>) -> Option<String> {
    section
        .find_first(Selector::tag("h3"))
        .and_then(|heading| heading.find_first(Selector::tag("span")))
        .map(|span| span.trimmed_text())
}
