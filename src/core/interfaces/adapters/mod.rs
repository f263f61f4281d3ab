mod attachment_sink;
mod gif_image_fetcher;
mod gif_search_provider;

pub use attachment_sink::AttachmentSink;
pub use gif_image_fetcher::GifImageFetcher;
pub use gif_search_provider::GifSearchProvider;
