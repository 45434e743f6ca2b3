use crate::assemble::extract_bill;
use crate::config::ScrapeConfig;
use crate::errors::ScrapeError;
use crate::runtime::types::{BillStatus, PageKind, PageSource, RecordSink};
use crate::types::{ordinal, BillLocator, Extraction};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedBill {
    pub bill: String,
    pub bill_id: u32,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
    pub started_at: String,
    pub finished_at: String,
    pub completed: usize,
    pub reserved: usize,
    pub warnings: usize,
    pub failed: Vec<FailedBill>,
}

struct BillOutcome {
    result: Result<(BillStatus, usize), ScrapeError>,
    text_fetched: bool,
}

pub async fn scrape_range(
    config: &ScrapeConfig,
    pages: &dyn PageSource,
    sink: &dyn RecordSink,
) -> Result<ScrapeReport, ScrapeError> {
    config.validate()?;

    let mut report = ScrapeReport {
        started_at: chrono::Utc::now().to_rfc3339(),
        finished_at: String::new(),
        completed: 0,
        reserved: 0,
        warnings: 0,
        failed: Vec::new(),
    };

    tracing::info!(
        "[Scraper] Starting {} {} {}..={}",
        ordinal(config.congress),
        config.bill_type,
        config.from_id,
        config.to_id
    );

    for locator in config.locators() {
        let outcome = scrape_bill(config, &locator, pages, sink).await;

        match outcome.result {
            Ok((BillStatus::Completed, warnings)) => {
                report.completed += 1;
                report.warnings += warnings;
            }
            Ok((BillStatus::Reserved, _)) => report.reserved += 1,
            Err(err) => {
                tracing::error!("[Scraper] {} failed: {}", locator, err);
                report.failed.push(FailedBill {
                    bill: locator.display_id(),
                    bill_id: locator.bill_id,
                    error: err.to_string(),
                });
            }
        }

        if outcome.text_fetched {
            pause(config.delay()).await;
        }
    }

    report.finished_at = chrono::Utc::now().to_rfc3339();
    tracing::info!(
        "[Scraper] Done: {} completed, {} reserved, {} failed",
        report.completed,
        report.reserved,
        report.failed.len()
    );
    Ok(report)
}

/// Fetch, extract and store one bill. `text_fetched` is set when the text page
/// came from the network, so the caller knows to rate-limit.
async fn scrape_bill(
    config: &ScrapeConfig,
    locator: &BillLocator,
    pages: &dyn PageSource,
    sink: &dyn RecordSink,
) -> BillOutcome {
    let all_info = match pages.fetch_page(locator, &PageKind::AllInfo).await {
        Ok(page) => page,
        Err(err) => {
            return BillOutcome {
                result: Err(err),
                text_fetched: false,
            }
        }
    };
    if !all_info.from_cache {
        pause(config.delay()).await;
    }

    let text_kind = PageKind::Text {
        version: config.text_version.clone(),
    };
    let text_page = match pages.fetch_page(locator, &text_kind).await {
        Ok(page) => page,
        Err(err) => {
            return BillOutcome {
                result: Err(err),
                text_fetched: false,
            }
        }
    };

    BillOutcome {
        result: store_extraction(locator, &all_info.html, &text_page.html, sink).await,
        text_fetched: !text_page.from_cache,
    }
}

async fn store_extraction(
    locator: &BillLocator,
    all_info_html: &str,
    text_html: &str,
    sink: &dyn RecordSink,
) -> Result<(BillStatus, usize), ScrapeError> {
    match extract_bill(locator, all_info_html, text_html)? {
        Extraction::Reserved => {
            sink.mark_reserved(locator).await?;
            Ok((BillStatus::Reserved, 0))
        }
        Extraction::Record { record, warnings } => {
            for warning in &warnings {
                tracing::warn!("[Scraper] {}: {}", locator, warning);
            }
            sink.write_record(locator, &record).await?;
            tracing::info!(
                "[Scraper] {}: {}",
                locator,
                BillStatus::Completed.as_str()
            );
            Ok((BillStatus::Completed, warnings.len()))
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
