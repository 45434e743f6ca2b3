use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::{row_cells, row_context};
use crate::types::RelatedBillReference;

const EXCLUDED_ROW_STYLE: &str = "relatedbill_exrow";

/// Related bills in page order.
///
/// Each row holds the bill id, its title, the relationship label, who
/// identified the relationship and the latest action. Only the id and the
/// label are kept.
pub fn parse_related_bills(
    section: Element<'_, '_>,
) -> Result<Vec<RelatedBillReference>, ExtractError> {
    let mut related = Vec::new();
    for row in section.find_all(Selector::tag("tr")) {
        if row.has_class(EXCLUDED_ROW_STYLE) {
            continue;
        }
        let (_, values) = row_cells(&row);
        match values.as_slice() {
            [] => continue,
            [bill, _title, relationship, _identified_by, _latest_action] => {
                related.push(RelatedBillReference {
                    bill: bill.trimmed_text(),
                    relationship: relationship.trimmed_text(),
                });
            }
            _ => {
                return Err(ExtractError::UnrecognizedRelatedBillRowShape {
                    values: values.len(),
                    raw: row_context(&row),
                })
            }
        }
    }
    Ok(related)
}
