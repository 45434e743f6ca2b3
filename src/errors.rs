use std::io;

use thiserror::Error;

use crate::types::BillLocator;

/// How a failed extraction should be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A mandatory section is missing from the page. Retrying will not help.
    StructuralAbsence,
    /// A section is present but its content does not follow a known layout.
    MalformedField,
}

/// Failure raised by a section parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("overview section has no progress tracker")]
    MissingOverviewSection,
    #[error("text page has no current version header")]
    MissingCurrentTextHeader,
    #[error("mandatory section '{section}' not found")]
    MissingSection { section: &'static str },
    #[error("malformed person reference: {raw:?}")]
    MalformedPersonReference { raw: String },
    #[error("unrecognized committee row shape ({headers} header cells, {values} value cells): {raw:?}")]
    UnrecognizedCommitteeRowShape {
        headers: usize,
        values: usize,
        raw: String,
    },
    #[error("committee continuation row before any committee heading: {raw:?}")]
    ContinuationWithoutCommittee { raw: String },
    #[error("unrecognized related bill row shape ({values} value cells): {raw:?}")]
    UnrecognizedRelatedBillRowShape { values: usize, raw: String },
    #[error("unrecognized cosponsor row shape ({values} value cells): {raw:?}")]
    UnrecognizedCosponsorRowShape { values: usize, raw: String },
    #[error("failed to parse HTML: {0}")]
    Html(String),
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::MissingOverviewSection
            | ExtractError::MissingCurrentTextHeader
            | ExtractError::MissingSection { .. }
            | ExtractError::Html(_) => ErrorKind::StructuralAbsence,
            ExtractError::MalformedPersonReference { .. }
            | ExtractError::UnrecognizedCommitteeRowShape { .. }
            | ExtractError::ContinuationWithoutCommittee { .. }
            | ExtractError::UnrecognizedRelatedBillRowShape { .. }
            | ExtractError::UnrecognizedCosponsorRowShape { .. } => ErrorKind::MalformedField,
        }
    }
}

/// Extraction failure for one bill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{locator}: {source}")]
pub struct BillError {
    pub locator: BillLocator,
    #[source]
    pub source: ExtractError,
}

impl BillError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Extraction(#[from] BillError),
}
