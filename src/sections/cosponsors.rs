use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::{row_cells, row_context};
use crate::sections::person::parse_person_reference;
use crate::types::PersonReference;

const WITHDRAWN_BODY_ID: &str = "withdrawnTbody";

/// Cosponsors in page order.
///
/// `section` is the `#cosponsors-content` block, absent when a bill has no
/// cosponsors. A table whose body lists withdrawn cosponsors yields nothing.
pub fn parse_cosponsors(
    section: Option<Element<'_, '_>>,
) -> Result<Vec<PersonReference>, ExtractError> {
    let Some(table) =
        section.and_then(|section| section.find_first(Selector::tag("table").class("item_table")))
    else {
        return Ok(Vec::new());
    };

    let withdrawn = table
        .find_first(Selector::tag("tbody"))
        .and_then(|body| body.id())
        .is_some_and(|id| id == WITHDRAWN_BODY_ID);
    if withdrawn {
        return Ok(Vec::new());
    }

    let mut cosponsors = Vec::new();
    for row in table.find_all(Selector::tag("tr")) {
        let (_, values) = row_cells(&row);
        match values.as_slice() {
            [] => continue,
            [person, _date] => cosponsors.push(parse_person_reference(&person.trimmed_text())?),
            _ => {
                return Err(ExtractError::UnrecognizedCosponsorRowShape {
                    values: values.len(),
                    raw: row_context(&row),
                })
            }
        }
    }
    Ok(cosponsors)
}
