use bill_ingest::dom::{Document, Selector};
use bill_ingest::errors::{ErrorKind, ExtractError};
use bill_ingest::sections::committees::{classify_row, parse_committees, CommitteeRow};
use bill_ingest::sections::cosponsors::parse_cosponsors;
use bill_ingest::sections::overview::parse_overview;
use bill_ingest::sections::related_bills::parse_related_bills;
use bill_ingest::sections::subjects::parse_subjects;
use bill_ingest::sections::text::{parse_current_summary, parse_current_text};
use bill_ingest::sections::titles::{parse_display_title, parse_titles};
use bill_ingest::types::{Chamber, OverviewValue, Warning};

fn section_html(id: &str, inner: &str) -> String {
    format!(r#"<html><body><div id="{id}">{inner}</div></body></html>"#)
}

#[test]
fn test_overview_parse_is_idempotent() {
    let html = r#"<div class="overview"><table>
<tr><th>Sponsor:</th><td>Rep. Doe, Jane [D-CA-12] (Introduced 01/04/2021)</td></tr>
<tr><th>Committee Meetings:</th><td>02/24/21 10:00AM</td></tr>
<tr><th>Roll Call Votes:</th><td>There have been 12 roll call votes</td></tr>
<tr><th>Latest Action (modified):</th><td>Passed.</td></tr>
<tr><th>Notes:</th></tr>
<tr><th>Related Documents:</th><td> H. Rept. 117-9 </td></tr>
</table>
<ol class="bill_progress"><li>Introduced</li></ol></div>"#;
    let doc = Document::parse(html).unwrap();
    let section = doc
        .find_first(Selector::tag("div").class("overview"))
        .unwrap();

    let first = parse_overview(section).unwrap();
    let second = parse_overview(section).unwrap();
    assert_eq!(first, second);

    let keys = first.overview.fields.keys().cloned().collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec!["notes", "related documents", "roll call votes", "sponsor"]
    );
    assert_eq!(
        first.overview.fields.get("roll call votes"),
        Some(&OverviewValue::Count(12))
    );
    assert_eq!(first.overview.text("notes"), Some(""));
    assert_eq!(first.overview.sponsor().unwrap().name, "Rep. Doe, Jane");
    assert_eq!(
        first.overview.fields.get("related documents"),
        Some(&OverviewValue::Text("H. Rept. 117-9".to_string()))
    );

    let expected_warning = Warning::UnknownOverviewKey {
        key: "related documents".to_string(),
        value: "H. Rept. 117-9".to_string(),
    };
    assert_eq!(first.warnings, vec![expected_warning.clone()]);
    assert_eq!(second.warnings, vec![expected_warning]);
}

#[test]
fn test_overview_without_tracker_fails() {
    let doc = Document::parse(r#"<div class="overview"><table></table></div>"#).unwrap();
    let section = doc
        .find_first(Selector::tag("div").class("overview"))
        .unwrap();

    let err = parse_overview(section).unwrap_err();
    assert_eq!(err, ExtractError::MissingOverviewSection);
    assert_eq!(err.kind(), ErrorKind::StructuralAbsence);
}

#[test]
fn test_display_title_requires_separator() {
    let doc = Document::parse(r#"<h1 class="legDetail">H.R.9</h1>"#).unwrap();
    assert_eq!(parse_display_title(&doc), None);

    let doc = Document::parse(r#"<h1 class="legDetail">H.R.9 - </h1>"#).unwrap();
    assert_eq!(parse_display_title(&doc), None);

    let doc = Document::parse(
        r#"<h1 class="legDetail">H.R.2 - Act - With Dash<br/><span>117th</span></h1>"#,
    )
    .unwrap();
    assert_eq!(parse_display_title(&doc).as_deref(), Some("Act - With Dash"));
}

#[test]
fn test_titles_require_official_block() {
    let html = section_html(
        "titles_main",
        r#"<div class="shortTitles"><div class="titles-row"><div class="house-column">Short Titles
Example Act
</div></div></div>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("titles_main")).unwrap();

    let err = parse_titles(section, Chamber::House).unwrap_err();
    assert_eq!(
        err,
        ExtractError::MissingSection {
            section: "officialTitles"
        }
    );
}

#[test]
fn test_cosponsor_rows_must_have_two_cells() {
    let html = section_html(
        "cosponsors-content",
        r#"<table class="item_table"><tbody>
<tr><td>Rep. Roe, John [R-TX-7]</td><td>01/04/2021</td><td>extra</td></tr>
</tbody></table>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("cosponsors-content"));

    let err = parse_cosponsors(section).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::UnrecognizedCosponsorRowShape { values: 3, .. }
    ));
}

#[test]
fn test_absent_cosponsor_section_is_empty() {
    assert!(parse_cosponsors(None).unwrap().is_empty());

    let html = section_html("cosponsors-content", "<p>No cosponsors.</p>");
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("cosponsors-content"));
    assert!(parse_cosponsors(section).unwrap().is_empty());
}

#[test]
fn test_committee_row_shapes() {
    let html = r#"<table>
<tr class="committee"><th>Judiciary</th><td>a</td><td>b</td><td>c</td></tr>
<tr class="subcommittee"><th>Crime</th><td>a</td><td>b</td><td>c</td></tr>
<tr class="committee"><td>a</td><td>b</td><td>c</td></tr>
<tr class="subcommittee"><td>Courts</td><td>b</td><td>c</td><td>d</td></tr>
<tr><td>a</td><td>b</td><td>c</td></tr>
<tr class="committee"><td>a</td><td>b</td></tr>
</table>"#;
    let doc = Document::parse(html).unwrap();
    let rows = doc.find_all(Selector::tag("tr"));

    assert_eq!(
        classify_row(&rows[0]).unwrap(),
        CommitteeRow::Committee("Judiciary".to_string())
    );
    assert_eq!(
        classify_row(&rows[1]).unwrap(),
        CommitteeRow::Subcommittee("Crime".to_string())
    );
    assert_eq!(classify_row(&rows[2]).unwrap(), CommitteeRow::Continuation);
    assert_eq!(
        classify_row(&rows[3]).unwrap(),
        CommitteeRow::SubcommitteeActivity("Courts".to_string())
    );
    assert_eq!(classify_row(&rows[4]).unwrap(), CommitteeRow::Unclassified);

    let err = classify_row(&rows[5]).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::UnrecognizedCommitteeRowShape {
            headers: 0,
            values: 2,
            ..
        }
    ));
    assert_eq!(err.kind(), ErrorKind::MalformedField);
}

#[test]
fn test_committee_names_follow_row_order() {
    let html = section_html(
        "committees-content",
        r#"<table>
<tr><th>Committee</th><th>Date</th><th>Activity</th><th>Reports</th></tr>
<tr class="committee"><th>Judiciary</th><td>01/04</td><td>Referred to</td><td></td></tr>
<tr class="committee"><td>02/24</td><td>Markup by</td><td></td></tr>
<tr class="committee"><th>Rules</th><td>03/01</td><td>Referred to</td><td></td></tr>
<tr class="committee"><td>03/02</td><td>Reported by</td><td></td></tr>
</table>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("committees-content")).unwrap();

    assert_eq!(
        parse_committees(section).unwrap(),
        vec!["Judiciary", "Judiciary", "Rules", "Rules"]
    );
}

#[test]
fn test_committee_continuation_needs_a_committee() {
    let html = section_html(
        "committees-content",
        r#"<table><tr class="committee"><td>02/24</td><td>Markup by</td><td></td></tr></table>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("committees-content")).unwrap();

    let err = parse_committees(section).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::ContinuationWithoutCommittee { .. }
    ));
}

#[test]
fn test_related_bill_row_with_three_cells_fails() {
    let html = section_html(
        "relatedBills-content",
        r#"<table><tbody><tr><td>S.1</td><td>Example Act</td><td>Identical bill</td></tr></tbody></table>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc
        .find_first(Selector::tag("div").id("relatedBills-content"))
        .unwrap();

    let err = parse_related_bills(section).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::UnrecognizedRelatedBillRowShape { values: 3, .. }
    ));
}

#[test]
fn test_subjects_require_both_columns() {
    let html = section_html(
        "subjects-content",
        r#"<div class="search-column-main"><ul><li>Taxation</li></ul></div>"#,
    );
    let doc = Document::parse(&html).unwrap();
    let section = doc.find_first(Selector::tag("div").id("subjects-content")).unwrap();

    assert_eq!(
        parse_subjects(section).unwrap_err(),
        ExtractError::MissingSection {
            section: "search-column-nav"
        }
    );
}

#[test]
fn test_summary_requires_heading() {
    let html = section_html("latestSummary-content", "<p>Text only.</p>");
    let doc = Document::parse(&html).unwrap();
    let section = doc
        .find_first(Selector::tag("div").id("latestSummary-content"))
        .unwrap();

    let err = parse_current_summary(section).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StructuralAbsence);
}

#[test]
fn test_current_text_strips_only_one_preamble() {
    let html = r#"<h3 class="currentVersion">Text: <span>Engrossed in House</span></h3>
<pre id="billTextContainer">&lt;DOC&gt;
AN ACT
To amend A BILL
about things.</pre>"#;
    let doc = Document::parse(html).unwrap();

    let text = parse_current_text(&doc).unwrap();
    assert_eq!(text.header, "Engrossed in House");
    assert_eq!(text.text, "To amend A BILL\nabout things.");
}

#[test]
fn test_introduced_text_keeps_headings_ending_in_act() {
    let html = r#"<h3 class="currentVersion">Text: <span>Introduced in House</span></h3>
<pre id="billTextContainer">&lt;DOC&gt;
117th CONGRESS
H. R. 5
A BILL
To amend the Clean Water Act.
SEC. 2. AMENDMENTS TO THE OCEAN ACT
Text of section.</pre>"#;
    let doc = Document::parse(html).unwrap();

    let text = parse_current_text(&doc).unwrap();
    assert_eq!(
        text.text,
        "To amend the Clean Water Act.\nSEC. 2. AMENDMENTS TO THE OCEAN ACT\nText of section."
    );
}

#[test]
fn test_current_text_requires_container() {
    let doc =
        Document::parse(r#"<h3 class="currentVersion"><span>Introduced</span></h3>"#).unwrap();

    assert_eq!(
        parse_current_text(&doc).unwrap_err(),
        ExtractError::MissingSection {
            section: "billTextContainer"
        }
    );
}
