use crate::errors::ScrapeError;
use crate::types::{BillLocator, BillRecord};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    AllInfo,
    /// Plain-text rendering of a version; an empty suffix is the current one.
    Text { version: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub html: String,
    pub from_cache: bool,
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        locator: &BillLocator,
        kind: &PageKind,
    ) -> Result<FetchedPage, ScrapeError>;
}

#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn write_record(
        &self,
        locator: &BillLocator,
        record: &BillRecord,
    ) -> Result<(), ScrapeError>;

    async fn mark_reserved(&self, locator: &BillLocator) -> Result<(), ScrapeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Completed,
    Reserved,
}

impl BillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Completed => "completed",
            BillStatus::Reserved => "reserved",
        }
    }
}
