use crate::error::BookmarkError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, BookmarkError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, BookmarkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                BookmarkError::retrieval("<client>", format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, BookmarkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BookmarkError::retrieval(url, format!("Network error: {e}")))?;

        if !response.status().is_success() {
            return Err(BookmarkError::retrieval(
                url,
                format!("HTTP error {}", response.status().as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| {
                BookmarkError::retrieval(url, format!("Error reading response body: {e}"))
            })
    }
}
