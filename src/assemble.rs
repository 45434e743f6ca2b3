use crate::dom::{Document, Selector};
use crate::errors::{BillError, ExtractError};
use crate::sections::committees::parse_committees;
use crate::sections::common::require;
use crate::sections::cosponsors::parse_cosponsors;
use crate::sections::overview::{parse_overview, OverviewSection};
use crate::sections::related_bills::parse_related_bills;
use crate::sections::subjects::parse_subjects;
use crate::sections::text::{parse_current_summary, parse_current_text};
use crate::sections::titles::{parse_display_title, parse_titles};
use crate::types::{BillLocator, BillRecord, Extraction};

/// Parse both pages of a bill and assemble its record.
pub fn extract_bill(
    locator: &BillLocator,
    all_info_html: &str,
    text_html: &str,
) -> Result<Extraction, BillError> {
    let with_locator = |source| BillError {
        locator: *locator,
        source,
    };
    let all_info = Document::parse(all_info_html).map_err(with_locator)?;
    let text_page = Document::parse(text_html).map_err(with_locator)?;
    assemble_record(locator, &all_info, &text_page)
}

/// Build one record from the "all info" page and the current text page.
///
/// A page without a title belongs to a reserved bill number and yields
/// [`Extraction::Reserved`]. Every other failure is fatal for the bill.
pub fn assemble_record(
    locator: &BillLocator,
    all_info: &Document<'_>,
    text_page: &Document<'_>,
) -> Result<Extraction, BillError> {
    assemble(locator, all_info, text_page).map_err(|source| BillError {
        locator: *locator,
        source,
    })
}

fn assemble(
    locator: &BillLocator,
    all_info: &Document<'_>,
    text_page: &Document<'_>,
) -> Result<Extraction, ExtractError> {
    let Some(title) = parse_display_title(all_info) else {
        return Ok(Extraction::Reserved);
    };

    let overview_section = all_info
        .find_first(Selector::tag("div").class("overview"))
        .ok_or(ExtractError::MissingOverviewSection)?;
    let OverviewSection { overview, warnings } = parse_overview(overview_section)?;

    let titles = parse_titles(
        require(
            all_info.find_first(Selector::tag("div").id("titles_main")),
            "titles_main",
        )?,
        locator.chamber(),
    )?;

    let cosponsors =
        parse_cosponsors(all_info.find_first(Selector::tag("div").id("cosponsors-content")))?;

    let committees = parse_committees(require(
        all_info.find_first(Selector::tag("div").id("committees-content")),
        "committees-content",
    )?)?;

    let related_bills = parse_related_bills(require(
        all_info.find_first(Selector::tag("div").id("relatedBills-content")),
        "relatedBills-content",
    )?)?;

    let subjects = parse_subjects(require(
        all_info.find_first(Selector::tag("div").id("subjects-content")),
        "subjects-content",
    )?)?;

    let current_summary = parse_current_summary(require(
        all_info.find_first(Selector::tag("div").id("latestSummary-content")),
        "latestSummary-content",
    )?)?;

    let current_text = parse_current_text(text_page)?;

    let record = BillRecord {
        id: locator.display_id(),
        congress: locator.congress,
        url: locator.url(),
        title,
        overview,
        titles_short: titles.short,
        titles_official: titles.official,
        cosponsors,
        committees,
        related_bills,
        policy_area: subjects.policy_area,
        subjects: subjects.subjects,
        current_summary,
        current_text,
    };

    Ok(Extraction::Record {
        record: Box::new(record),
        warnings,
    })
}
