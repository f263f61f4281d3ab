use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::core::interfaces::adapters::GifSearchProvider;
use crate::core::models::GifResult;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<GiphyItem>,
}

#[derive(Debug, Deserialize)]
struct GiphyItem {
    id: String,
    #[serde(default)]
    title: String,
    images: GiphyImages,
}

#[derive(Debug, Deserialize)]
struct GiphyImages {
    preview_gif: GiphyRendition,
    original: GiphyRendition,
}

#[derive(Debug, Deserialize)]
struct GiphyRendition {
    url: String,
    #[serde(default, deserialize_with = "lenient_number")]
    size: u64,
    #[serde(default, deserialize_with = "lenient_number")]
    width: u64,
    #[serde(default, deserialize_with = "lenient_number")]
    height: u64,
}

/// GIPHY sends sizes and dimensions as strings; accept numbers as well.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("expected unsigned integer, got {}", number))),
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(0),
        serde_json::Value::String(text) => text.trim().parse().map_err(de::Error::custom),
        serde_json::Value::Null => Ok(0),
        other => Err(de::Error::custom(format!("unexpected value {}", other))),
    }
}

impl From<GiphyItem> for GifResult {
    fn from(item: GiphyItem) -> Self {
        GifResult {
            id: item.id,
            title: item.title,
            preview_url: item.images.preview_gif.url,
            original_url: item.images.original.url,
            original_size: item.images.original.size,
            width: u32::try_from(item.images.original.width).unwrap_or(u32::MAX),
            height: u32::try_from(item.images.original.height).unwrap_or(u32::MAX),
        }
    }
}

pub struct GiphySearchProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    rating: String,
}

impl GiphySearchProvider {
    pub fn new(endpoint: String, api_key: String, rating: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            rating,
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&api_key={}&rating={}",
            self.endpoint,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.rating)
        )
    }

    fn redact(&self, url: &str) -> String {
        url.replace(urlencoding::encode(&self.api_key).as_ref(), "<redacted>")
    }

    fn parse_search_response(body: &str) -> Result<Vec<GifResult>> {
        let response: SearchResponse =
            serde_json::from_str(body).context("Failed to parse GIPHY search response")?;

        Ok(response.data.into_iter().map(GifResult::from).collect())
    }
}

#[async_trait]
impl GifSearchProvider for GiphySearchProvider {
    async fn search_gifs(&self, query: &str) -> Result<Vec<GifResult>> {
        let search_url = self.construct_search_url(query);
        log::info!("[GIPHY] Searching for {:?}", query);
        log::debug!("[GIPHY] Search URL: {}", self.redact(&search_url));

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .context("GIPHY search request failed")?
            .error_for_status()
            .context("GIPHY search returned an error status")?;

        let response_text = response
            .text()
            .await
            .context("Failed to read GIPHY search response")?;

        let results = Self::parse_search_response(&response_text)?;
        log::debug!("[GIPHY] {} results for {:?}", results.len(), query);
        Ok(results)
    }
}
