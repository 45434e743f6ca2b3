use crate::dom::{Document, Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::require;
use crate::types::Chamber;

const SHORT_TITLE_LABEL: &str = "Short Title";
const OFFICIAL_TITLE_LABEL: &str = "Official Title";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Titles {
    pub short: Vec<String>,
    pub official: Vec<String>,
}

/// Bill title from the page heading, e.g. `"H.R.1 - For the People Act of 2021"`.
///
/// Everything after the first `" - "` is kept, so a title that itself contains
/// the separator survives whole.
///
/// Returns `None` for reserved bill numbers, whose pages carry no such heading.
pub fn parse_display_title(document: &Document<'_>) -> Option<String> {
    let heading = document.find_first(Selector::tag("h1").class("legDetail"))?;
    let text = heading.trimmed_text();
    let first_line = text.lines().next()?;
    let (_, title) = first_line.split_once(" - ")?;
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Parse the `#titles_main` block for the given chamber.
///
/// A missing short-titles block yields no short titles; not every bill has
/// one. The official-titles block is mandatory.
pub fn parse_titles(section: Element<'_, '_>, chamber: Chamber) -> Result<Titles, ExtractError> {
    let column = Selector::tag("div").class(chamber.column_class());
    let titles_row = Selector::tag("div").class("titles-row");

    let official_block = require(
        section.find_first(Selector::tag("div").class("officialTitles")),
        "officialTitles",
    )?;
    let official_row = require(
        official_block.find_first(titles_row),
        "officialTitles titles-row",
    )?;

    // Without a short-titles block the first row on the page is the official one.
    let short = section
        .find_first(titles_row)
        .filter(|row| !row.same_node(&official_row))
        .and_then(|row| row.find_first(column))
        .map(|block| title_lines(&block.text(), SHORT_TITLE_LABEL))
        .unwrap_or_default();

    let official_column = require(official_row.find_first(column), chamber.column_class())?;
    let official = title_lines(&official_column.text(), OFFICIAL_TITLE_LABEL);

    Ok(Titles { short, official })
}

fn title_lines(block_text: &str, label: &str) -> Vec<String> {
    block_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(label))
        .map(ToString::to_string)
        .collect()
}
