use std::sync::Arc;

use image::ImageFormat;

use crate::core::interfaces::adapters::{AttachmentSink, GifImageFetcher};
use crate::core::models::{AttachmentDraft, GifResult, GifServiceError};

/// Downloads the full-resolution rendition of `result` and turns it into a draft.
pub async fn download_attachment(
    image_fetcher: Arc<dyn GifImageFetcher>,
    result: GifResult,
) -> Result<AttachmentDraft, GifServiceError> {
    log::info!("[PICK] Downloading {} from {}", result.id, result.original_url);

    let bytes = image_fetcher
        .fetch_image(&result.original_url)
        .await
        .map_err(|e| GifServiceError::from_download_failure(&e))?;

    match image::guess_format(&bytes) {
        Ok(ImageFormat::Gif) => {}
        Ok(other) => {
            return Err(GifServiceError::MalformedResponse(format!(
                "expected a GIF for {}, got {:?}",
                result.id, other
            )));
        }
        Err(e) => {
            return Err(GifServiceError::MalformedResponse(format!(
                "unrecognised image data for {}: {}",
                result.id, e
            )));
        }
    }

    log::debug!("[PICK] Downloaded {} bytes for {}", bytes.len(), result.id);
    Ok(AttachmentDraft::from_gif(&result, bytes))
}

pub fn deliver_attachment(
    sink: &dyn AttachmentSink,
    conversation_id: &str,
    attachment: AttachmentDraft,
) {
    log::info!(
        "[PICK] Handing {} ({} bytes) to conversation {}",
        attachment.url,
        attachment.size,
        conversation_id
    );
    sink.add_attachment(conversation_id, attachment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const GIF_BYTES: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";

    struct MockImageFetcher {
        body: anyhow::Result<Vec<u8>>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl MockImageFetcher {
        fn returning(body: &[u8]) -> Self {
            Self {
                body: Ok(body.to_vec()),
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                body: Err(anyhow::anyhow!("503 Service Unavailable")),
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl GifImageFetcher for MockImageFetcher {
        async fn fetch_image(&self, url: &str) -> anyhow::Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.body {
                Ok(bytes) => Ok(bytes.clone()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        delivered: Mutex<Vec<(String, AttachmentDraft)>>,
    }

    impl AttachmentSink for RecordingSink {
        fn add_attachment(&self, conversation_id: &str, attachment: AttachmentDraft) {
            self.delivered
                .lock()
                .unwrap()
                .push((conversation_id.to_string(), attachment));
        }
    }

    fn create_result() -> GifResult {
        GifResult {
            id: "gif-2".to_string(),
            title: "Second".to_string(),
            preview_url: "https://media.test/gif-2/preview.gif".to_string(),
            original_url: "https://media.test/gif-2/giphy.gif".to_string(),
            original_size: GIF_BYTES.len() as u64,
            width: 1,
            height: 1,
        }
    }

    #[tokio::test]
    async fn test_download_attachment_fetches_original_rendition() {
        let fetcher = Arc::new(MockImageFetcher::returning(GIF_BYTES));
        let requested = Arc::clone(&fetcher.requested);

        let draft = download_attachment(fetcher, create_result()).await.unwrap();

        assert_eq!(
            *requested.lock().unwrap(),
            vec!["https://media.test/gif-2/giphy.gif".to_string()]
        );
        assert_eq!(draft.content_type, "image/gif");
        assert_eq!(draft.url, "https://media.test/gif-2/giphy.gif");
        assert_eq!(draft.data.len(), GIF_BYTES.len());
    }

    #[tokio::test]
    async fn test_download_attachment_maps_transport_failure() {
        let fetcher = Arc::new(MockImageFetcher::failing());

        let result = download_attachment(fetcher, create_result()).await;

        assert!(matches!(result, Err(GifServiceError::Download(_))));
    }

    #[tokio::test]
    async fn test_download_attachment_rejects_non_gif_body() {
        let fetcher = Arc::new(MockImageFetcher::returning(b"<html>rate limited</html>"));

        let result = download_attachment(fetcher, create_result()).await;

        assert!(matches!(result, Err(GifServiceError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_download_attachment_rejects_png_body() {
        let png_signature = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
        let fetcher = Arc::new(MockImageFetcher::returning(png_signature));

        let result = download_attachment(fetcher, create_result()).await;

        assert!(matches!(result, Err(GifServiceError::MalformedResponse(ref msg)) if msg.contains("Png")));
    }

    #[test]
    fn test_deliver_attachment_invokes_sink_once_with_conversation() {
        let sink = RecordingSink::default();
        let draft = AttachmentDraft::from_gif(&create_result(), GIF_BYTES.to_vec());

        deliver_attachment(&sink, "conv-1", draft);

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "conv-1");
        assert_eq!(delivered[0].1.content_type, "image/gif");
    }
}
