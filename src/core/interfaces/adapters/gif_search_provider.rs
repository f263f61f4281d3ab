use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::GifResult;

#[async_trait]
pub trait GifSearchProvider: Send + Sync {
    /// Results come back in the order the service ranked them.
    async fn search_gifs(&self, query: &str) -> Result<Vec<GifResult>>;
}
