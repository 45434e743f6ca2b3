use crate::errors::ScrapeError;
use crate::types::{BillLocator, BillType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeConfig {
    pub congress: u32,
    pub bill_type: BillType,
    pub from_id: u32,
    pub to_id: u32,
    /// Text version suffix such as `/ih`; empty selects the current version.
    #[serde(default)]
    pub text_version: String,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_delay_ms() -> u64 {
    3000
}

fn default_use_cache() -> bool {
    true
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache/html")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

impl ScrapeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: ScrapeConfig = serde_json::from_str(&content).map_err(|e| {
            ScrapeError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.congress == 0 {
            return Err(ScrapeError::Config("congress must be positive".to_string()));
        }
        if self.from_id == 0 {
            return Err(ScrapeError::Config("fromId must be positive".to_string()));
        }
        if self.to_id < self.from_id {
            return Err(ScrapeError::Config(format!(
                "toId ({}) is before fromId ({})",
                self.to_id, self.from_id
            )));
        }
        if !self.text_version.is_empty() && !self.text_version.starts_with('/') {
            return Err(ScrapeError::Config(format!(
                "textVersion must start with '/': {}",
                self.text_version
            )));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn locators(&self) -> impl Iterator<Item = BillLocator> + '_ {
        (self.from_id..=self.to_id)
            .map(|bill_id| BillLocator::new(self.congress, self.bill_type, bill_id))
    }
}
