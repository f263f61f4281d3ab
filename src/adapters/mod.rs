mod composer_draft_store;
mod giphy_search_provider;
mod http_image_fetcher;

pub use composer_draft_store::ComposerDraftStore;
pub use giphy_search_provider::GiphySearchProvider;
pub use http_image_fetcher::HttpImageFetcher;
