use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use iced::widget::image;

use crate::core::interfaces::adapters::{GifImageFetcher, GifSearchProvider};
use crate::core::models::{GifResult, GifServiceError, ObjectUrl, PreviewStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// A search hit with its preview bytes, before an object url is minted for it.
#[derive(Clone)]
pub struct LoadedGif {
    pub result: GifResult,
    pub preview_bytes: Vec<u8>,
}

impl std::fmt::Debug for LoadedGif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedGif")
            .field("id", &self.result.id)
            .field("preview_len", &self.preview_bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DisplayedGif {
    pub result: GifResult,
    pub object_url: ObjectUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
    Unavailable(GifServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Applied(usize),
    Failed(GifServiceError),
    Stale,
}

/// Debounces query changes and keeps only the newest search authoritative.
///
/// Every `schedule` bumps the generation. A debounce timer or a fetch batch carrying
/// an older generation is dropped when it reports back.
pub struct SearchSequencer {
    debounce_window: Duration,
    generation: u64,
    in_flight: Option<u64>,
    status: SearchStatus,
    results: Vec<DisplayedGif>,
    previews: PreviewStore,
}

impl SearchSequencer {
    pub fn new(debounce_window: Duration) -> Self {
        Self {
            debounce_window,
            generation: 0,
            in_flight: None,
            status: SearchStatus::Idle,
            results: Vec::new(),
            previews: PreviewStore::new(),
        }
    }

    pub fn debounce_window(&self) -> Duration {
        self.debounce_window
    }

    pub fn schedule(&mut self, query: &str) -> SearchTicket {
        self.generation += 1;
        log::debug!(
            "[SEARCH] Scheduled generation {} for query {:?}",
            self.generation,
            query
        );
        SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Called when a debounce timer fires. Only the newest ticket may start a fetch.
    pub fn begin(&mut self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket.generation) {
            log::debug!(
                "[SEARCH] Suppressing generation {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        log::info!(
            "[SEARCH] Starting search for {:?} (generation {})",
            ticket.query,
            ticket.generation
        );
        self.in_flight = Some(ticket.generation);
        self.status = SearchStatus::Loading;
        true
    }

    pub fn complete(
        &mut self,
        generation: u64,
        batch: Result<Vec<LoadedGif>, GifServiceError>,
    ) -> BatchOutcome {
        if self.in_flight != Some(generation) || !self.is_current(generation) {
            log::debug!(
                "[SEARCH] Discarding stale batch from generation {}",
                generation
            );
            return BatchOutcome::Stale;
        }

        self.in_flight = None;

        match batch {
            Ok(loaded) => {
                self.release_results();
                self.results = loaded
                    .into_iter()
                    .map(|gif| DisplayedGif {
                        object_url: self.previews.create(gif.preview_bytes),
                        result: gif.result,
                    })
                    .collect();
                self.status = SearchStatus::Ready;
                log::info!(
                    "[SEARCH] Generation {} displayed {} results",
                    generation,
                    self.results.len()
                );
                BatchOutcome::Applied(self.results.len())
            }
            Err(error) => {
                log::warn!("[SEARCH] Generation {} failed: {}", generation, error);
                self.release_results();
                self.status = SearchStatus::Unavailable(error.clone());
                BatchOutcome::Failed(error)
            }
        }
    }

    /// Invalidates anything still pending and releases every preview.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.release_results();
        self.status = SearchStatus::Idle;
        log::debug!(
            "[SEARCH] Cancelled, generation advanced to {}",
            self.generation
        );
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn results(&self) -> &[DisplayedGif] {
        &self.results
    }

    pub fn result_at(&self, index: usize) -> Option<&GifResult> {
        self.results.get(index).map(|displayed| &displayed.result)
    }

    pub fn preview(&self, url: &ObjectUrl) -> Option<&image::Handle> {
        self.previews.resolve(url)
    }

    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    fn release_results(&mut self) {
        for displayed in self.results.drain(..) {
            self.previews.revoke(&displayed.object_url);
        }
    }
}

/// Search, then download every preview concurrently. One failed preview fails the batch.
pub async fn fetch_batch(
    query: String,
    search_provider: Arc<dyn GifSearchProvider>,
    image_fetcher: Arc<dyn GifImageFetcher>,
) -> Result<Vec<LoadedGif>, GifServiceError> {
    let results = search_provider
        .search_gifs(&query)
        .await
        .map_err(|e| GifServiceError::from_search_failure(&e))?;

    log::debug!(
        "[SEARCH] {} results for {:?}, fetching previews",
        results.len(),
        query
    );

    let previews = results.into_iter().map(|result| {
        let image_fetcher = Arc::clone(&image_fetcher);
        async move {
            let preview_bytes = image_fetcher
                .fetch_image(&result.preview_url)
                .await
                .map_err(|e| GifServiceError::from_preview_failure(&e))?;
            Ok::<_, GifServiceError>(LoadedGif {
                result,
                preview_bytes,
            })
        }
    });

    try_join_all(previews).await
}
