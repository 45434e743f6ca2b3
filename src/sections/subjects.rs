use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::require;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subjects {
    pub policy_area: String,
    pub subjects: Vec<String>,
}

/// Policy area (first entry of the navigation list) and legislative subjects.
pub fn parse_subjects(section: Element<'_, '_>) -> Result<Subjects, ExtractError> {
    let nav = require(
        section.find_first(Selector::tag("div").class("search-column-nav")),
        "search-column-nav",
    )?;
    let main = require(
        section.find_first(Selector::tag("div").class("search-column-main")),
        "search-column-main",
    )?;

    let policy_area = nav
        .find_first(Selector::tag("ul"))
        .and_then(|list| list.find_first(Selector::tag("li")))
        .map(|entry| entry.trimmed_text())
        .unwrap_or_default();

    let subjects = main
        .find_first(Selector::tag("ul"))
        .map(|list| {
            list.find_all(Selector::tag("li"))
                .iter()
                .map(|entry| entry.trimmed_text())
                .collect()
        })
        .unwrap_or_default();

    Ok(Subjects {
        policy_area,
        subjects,
    })
}
