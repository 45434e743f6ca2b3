use crate::errors::ScrapeError;
use crate::runtime::fetcher::Fetcher;
use crate::runtime::types::{FetchedPage, PageKind, PageSource};
use crate::types::BillLocator;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Serves bill pages from an on-disk HTML cache, fetching and storing misses.
pub struct CachedPageSource {
    fetcher: Arc<dyn Fetcher>,
    cache_dir: PathBuf,
    use_cache: bool,
}

impl CachedPageSource {
    pub fn new(fetcher: Arc<dyn Fetcher>, cache_dir: impl Into<PathBuf>, use_cache: bool) -> Self {
        Self {
            fetcher,
            cache_dir: cache_dir.into(),
            use_cache,
        }
    }

    pub fn cache_path(&self, locator: &BillLocator, kind: &PageKind) -> PathBuf {
        cache_path(&self.cache_dir, locator, kind)
    }
}

/// `{cache_dir}/{congress}/{bill_type}/{id}-all.html` or `{id}-txt{version}.html`,
/// with dashes in the bill type replaced by underscores.
pub fn cache_path(cache_dir: &Path, locator: &BillLocator, kind: &PageKind) -> PathBuf {
    let file_name = match kind {
        PageKind::AllInfo => format!("{}-all.html", locator.bill_id),
        PageKind::Text { version } => {
            format!("{}-txt{}.html", locator.bill_id, version.replace('/', ""))
        }
    };
    cache_dir
        .join(locator.congress.to_string())
        .join(locator.bill_type.slug().replace('-', "_"))
        .join(file_name)
}

pub fn page_url(locator: &BillLocator, kind: &PageKind) -> String {
    match kind {
        PageKind::AllInfo => locator.all_info_url(),
        PageKind::Text { version } => locator.text_url(version),
    }
}

#[async_trait]
impl PageSource for CachedPageSource {
    async fn fetch_page(
        &self,
        locator: &BillLocator,
        kind: &PageKind,
    ) -> Result<FetchedPage, ScrapeError> {
        let path = self.cache_path(locator, kind);

        if self.use_cache {
            match tokio::fs::read_to_string(&path).await {
                Ok(html) => {
                    tracing::debug!("[Scraper] Cache hit: {}", path.display());
                    return Ok(FetchedPage {
                        html,
                        from_cache: true,
                    });
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }

        let url = page_url(locator, kind);
        tracing::debug!("[Scraper] Fetching {}", url);
        let html = self.fetcher.fetch(&url).await?;

        if self.use_cache {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, &html).await?;
        }

        Ok(FetchedPage {
            html,
            from_cache: false,
        })
    }
}
