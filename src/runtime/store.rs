use crate::errors::ScrapeError;
use crate::runtime::types::RecordSink;
use crate::types::{BillLocator, BillRecord};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::PathBuf;

/// Pretty-print a record with a 4-space indent and keys sorted at every level.
pub fn render_record_json(record: &BillRecord) -> Result<String, ScrapeError> {
    // `Value` objects are backed by a sorted map.
    let value = serde_json::to_value(record)?;
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|e| ScrapeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes one JSON file per bill under `{output_dir}/{congress}/{bill_type}/`.
pub struct JsonFileSink {
    output_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn record_path(&self, locator: &BillLocator) -> PathBuf {
        self.output_dir
            .join(locator.congress.to_string())
            .join(locator.bill_type.slug())
            .join(format!("{}.json", locator.bill_id))
    }
}

#[async_trait]
impl RecordSink for JsonFileSink {
    async fn write_record(
        &self,
        locator: &BillLocator,
        record: &BillRecord,
    ) -> Result<(), ScrapeError> {
        let path = self.record_path(locator);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = render_record_json(record)?;
        tokio::fs::write(&path, json).await?;
        tracing::debug!("[Scraper] Wrote {}", path.display());
        Ok(())
    }

    async fn mark_reserved(&self, locator: &BillLocator) -> Result<(), ScrapeError> {
        tracing::info!("[Scraper] {}: reserved bill number, nothing written", locator);
        Ok(())
    }
}
