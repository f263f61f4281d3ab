use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::GifImageFetcher;

pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GifImageFetcher for HttpImageFetcher {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[GIPHY] Fetching image {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Image request failed for {}", url))?
            .error_for_status()
            .with_context(|| format!("Image request returned an error status for {}", url))?;

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read image body for {}", url))?;

        Ok(bytes.to_vec())
    }
}
