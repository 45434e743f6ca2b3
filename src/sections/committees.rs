//! Committee activity table.
//!
//! Rows come in several shapes depending on whether they open a committee
//! group, name a subcommittee, or only list another activity of the committee
//! above them. Each row is classified first, then the classified rows are
//! folded into a flat list of names.

use crate::dom::{Element, Selector};
use crate::errors::ExtractError;
use crate::sections::common::{row_cells, row_context};

const COMMITTEE_STYLE: &str = "committee";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitteeRow {
    /// No value cells.
    Separator,
    /// No class attribute on the row.
    Unclassified,
    /// One header and three values on a committee-styled row.
    Committee(String),
    /// One header and three values on any other row style.
    Subcommittee(String),
    /// Three values without a header: another activity of the current committee.
    Continuation,
    /// Four values: a subcommittee named in the row itself.
    SubcommitteeActivity(String),
}

pub fn classify_row(row: &Element<'_, '_>) -> Result<CommitteeRow, ExtractError> {
    let (headers, values) = row_cells(row);
    if values.is_empty() {
        return Ok(CommitteeRow::Separator);
    }
    let Some(style) = row.first_class() else {
        return Ok(CommitteeRow::Unclassified);
    };

    match (headers.as_slice(), values.as_slice()) {
        ([header], [_, _, _]) if style == COMMITTEE_STYLE => {
            Ok(CommitteeRow::Committee(header.trimmed_text()))
        }
        ([header], [_, _, _]) => Ok(CommitteeRow::Subcommittee(header.trimmed_text())),
        ([], [_, _, _]) => Ok(CommitteeRow::Continuation),
        (_, [first, _, _, _]) => Ok(CommitteeRow::SubcommitteeActivity(
            headers.first().unwrap_or(first).trimmed_text(),
        )),
        _ => Err(ExtractError::UnrecognizedCommitteeRowShape {
            headers: headers.len(),
            values: values.len(),
            raw: row_context(row),
        }),
    }
}

/// Names emitted so far plus the committee heading continuation rows inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeContext {
    current: Option<String>,
    names: Vec<String>,
}

impl CommitteeContext {
    /// Apply one classified row. `row_text` is only rendered for the error.
    pub fn advance(
        mut self,
        row: CommitteeRow,
        row_text: impl FnOnce() -> String,
    ) -> Result<Self, ExtractError> {
        match row {
            CommitteeRow::Separator | CommitteeRow::Unclassified => {}
            CommitteeRow::Committee(name) => {
                self.current = Some(name.clone());
                self.names.push(name);
            }
            CommitteeRow::Subcommittee(name) | CommitteeRow::SubcommitteeActivity(name) => {
                self.names.push(name);
            }
            CommitteeRow::Continuation => {
                let Some(current) = self.current.clone() else {
                    return Err(ExtractError::ContinuationWithoutCommittee { raw: row_text() });
                };
                self.names.push(current);
            }
        }
        Ok(self)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Committee and subcommittee names in row order. Repeated names are kept.
pub fn parse_committees(section: Element<'_, '_>) -> Result<Vec<String>, ExtractError> {
    let context = section.find_all(Selector::tag("tr")).iter().try_fold(
        CommitteeContext::default(),
        |context, row| context.advance(classify_row(row)?, || row_context(row)),
    )?;
    Ok(context.into_names())
}
