use crate::errors::ScrapeError;
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let fetch_error = |reason: String| ScrapeError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(format!("network error: {e}")))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!(
                "HTTP status {}",
                response.status().as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(format!("error reading response body: {e}")))
    }
}
