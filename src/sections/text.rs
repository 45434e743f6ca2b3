use crate::dom::{Document, Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::heading_span_text;
use crate::types::TextBlock;
use regex::Regex;
use std::sync::LazyLock;

const DOC_MARKER: &str = "<DOC>";

// "AN ACT" once the bill passed its originating chamber, "A BILL" before.
// Only a line holding nothing but the marker counts.
static PREAMBLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:AN ACT|A BILL)[ \t]*\r?$").unwrap());

/// Current version header and normalized full text from the text page.
pub fn parse_current_text(page: &Document<'_>) -> Result<TextBlock, ExtractError> {
    let header = page
        .find_first(Selector::tag("h3").class("currentVersion"))
        .and_then(|heading| heading.find_first(Selector::tag("span")))
        .map(|span| span.trimmed_text())
        .ok_or(ExtractError::MissingCurrentTextHeader)?;

    let container = page
        .find_first(Selector::tag("pre").id("billTextContainer"))
        .ok_or(ExtractError::MissingSection {
            section: "billTextContainer",
        })?;

    Ok(TextBlock {
        header,
        text: normalize_bill_text(&container.text()),
    })
}

/// Strip the document boilerplate and the "AN ACT" / "A BILL" preamble.
pub fn normalize_bill_text(raw: &str) -> String {
    let body = match raw.rfind(DOC_MARKER) {
        Some(index) => &raw[index + DOC_MARKER.len()..],
        None => raw,
    }
    .trim();

    match PREAMBLE_RE.find(body) {
        Some(found) => body[found.end()..].trim().to_string(),
        None => body.to_string(),
    }
}

/// Latest summary from `#latestSummary-content`: its heading and paragraphs.
pub fn parse_current_summary(section: Element<'_, '_>) -> Result<TextBlock, ExtractError> {
    let header = heading_span_text(&section).ok_or(ExtractError::MissingSection {
        section: "latestSummary header",
    })?;
    let text = section
        .find_all(Selector::tag("p"))
        .iter()
        .map(|paragraph| paragraph.trimmed_text())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(TextBlock { header, text })
}
