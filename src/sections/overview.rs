use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use crate::sections::person::parse_person_reference;
use crate::types::{Overview, OverviewValue, Warning};
use regex::Regex;
use std::sync::LazyLock;

static ROLL_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^There have been (\d+) roll call votes").unwrap());

const TRACKER_ARTIFACT: &str = "Array";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyPolicy {
    /// Represented elsewhere in the record, or low-value duplication.
    Skip,
    Sponsor,
    RollCallVotes,
    Text,
    Unknown,
}

fn key_policy(key: &str) -> KeyPolicy {
    match key {
        "committees"
        | "latest action"
        | "latest action (modified)"
        | "committee meetings"
        | "committee reports"
        | "committee prints" => KeyPolicy::Skip,
        "sponsor" => KeyPolicy::Sponsor,
        "roll call votes" => KeyPolicy::RollCallVotes,
        "notes" | "cbo cost estimate" => KeyPolicy::Text,
        _ => KeyPolicy::Unknown,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSection {
    pub overview: Overview,
    pub warnings: Vec<Warning>,
}

/// Parse the overview key/value table and the progress tracker.
///
/// Unknown keys are stored verbatim and reported through `warnings`.
pub fn parse_overview(section: Element<'_, '_>) -> Result<OverviewSection, ExtractError> {
    let mut overview = Overview::default();
    let mut warnings = Vec::new();

    for row in section.find_all(Selector::tag("tr")) {
        let Some(header) = row.find_first(Selector::tag("th")) else {
            continue;
        };
        let key = normalize_key(&header.text());
        let value = row
            .find_first(Selector::tag("td"))
            .map(|cell| cell.trimmed_text())
            .unwrap_or_default();

        let parsed = match key_policy(&key) {
            KeyPolicy::Skip => continue,
            KeyPolicy::Sponsor => OverviewValue::Person(parse_person_reference(&value)?),
            KeyPolicy::RollCallVotes => OverviewValue::Count(parse_roll_call_votes(&value)),
            KeyPolicy::Text => OverviewValue::Text(value),
            KeyPolicy::Unknown => {
                warnings.push(Warning::UnknownOverviewKey {
                    key: key.clone(),
                    value: value.clone(),
                });
                OverviewValue::Text(value)
            }
        };
        overview.fields.insert(key, parsed);
    }

    let tracker = section
        .find_first(Selector::tag("ol").class("bill_progress"))
        .ok_or(ExtractError::MissingOverviewSection)?;
    overview.tracker = tracker
        .find_all(Selector::tag("li"))
        .iter()
        .map(|stage| clean_tracker_stage(&stage.text()))
        .collect();

    Ok(OverviewSection { overview, warnings })
}

/// `"Roll Call Votes:"` becomes `"roll call votes"`.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(':')
        .unwrap_or(trimmed)
        .trim()
        .to_lowercase()
}

pub fn parse_roll_call_votes(value: &str) -> u32 {
    ROLL_CALL_RE
        .captures(value)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(0)
}

fn clean_tracker_stage(raw: &str) -> String {
    let trimmed = raw.trim();
    let stage = match trimmed.find(TRACKER_ARTIFACT) {
        Some(index) => &trimmed[..index],
        None => trimmed,
    };
    stage.trim_end().to_string()
}
