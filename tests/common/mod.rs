#![allow(dead_code)]
use async_trait::async_trait;
use bill_ingest::errors::ScrapeError;
use bill_ingest::runtime::fetcher::Fetcher;
use bill_ingest::runtime::types::RecordSink;
use bill_ingest::types::{BillLocator, BillRecord, BillType};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_fixture(filename: &str) -> String {
    let path = Path::new(&fixtures_dir()).join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn house_bill(bill_id: u32) -> BillLocator {
    BillLocator::new(117, BillType::HouseBill, bill_id)
}

pub fn senate_bill(bill_id: u32) -> BillLocator {
    BillLocator::new(117, BillType::SenateBill, bill_id)
}

/// Fetcher serving fixtures by URL and recording every request.
#[derive(Clone)]
pub struct MockFetcher {
    pub fixtures: Arc<Mutex<HashMap<String, String>>>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            fixtures: Arc::new(Mutex::new(HashMap::new())),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn add_fixture(&self, url: &str, content: &str) {
        self.fixtures
            .lock()
            .unwrap()
            .insert(url.to_string(), content.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.fixtures
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Fetch {
                url: url.to_string(),
                reason: "MockFetcher: no fixture".to_string(),
            })
    }
}

/// Sink keeping records and reserved locators in memory.
#[derive(Clone)]
pub struct MemorySink {
    pub records: Arc<Mutex<Vec<BillRecord>>>,
    pub reserved: Arc<Mutex<Vec<BillLocator>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            reserved: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn records(&self) -> Vec<BillRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn reserved(&self) -> Vec<BillLocator> {
        self.reserved.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write_record(
        &self,
        _locator: &BillLocator,
        record: &BillRecord,
    ) -> Result<(), ScrapeError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn mark_reserved(&self, locator: &BillLocator) -> Result<(), ScrapeError> {
        self.reserved.lock().unwrap().push(*locator);
        Ok(())
    }
}
