use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GifImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
