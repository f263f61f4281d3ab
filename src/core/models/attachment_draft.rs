use std::sync::Arc;

use super::GifResult;

pub const IMAGE_GIF: &str = "image/gif";

/// In-memory attachment handed to the host composer.
///
/// `data` and `screenshot_data` share one buffer; the picker keeps no copy once the
/// draft has been delivered.
#[derive(Clone)]
pub struct AttachmentDraft {
    pub url: String,
    pub pending: bool,
    pub screenshot_data: Arc<[u8]>,
    pub content_type: String,
    pub data: Arc<[u8]>,
    pub size: u64,
}

impl std::fmt::Debug for AttachmentDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachmentDraft")
            .field("url", &self.url)
            .field("pending", &self.pending)
            .field("content_type", &self.content_type)
            .field("data_len", &self.data.len())
            .field("size", &self.size)
            .finish()
    }
}

impl AttachmentDraft {
    pub fn from_gif(result: &GifResult, bytes: Vec<u8>) -> Self {
        let fetched_len = bytes.len() as u64;
        if result.original_size != 0 && result.original_size != fetched_len {
            log::warn!(
                "[PICK] Reported size {} for {} differs from fetched {} bytes, using fetched size",
                result.original_size,
                result.id,
                fetched_len
            );
        }

        let buffer: Arc<[u8]> = Arc::from(bytes);

        Self {
            url: result.original_url.clone(),
            pending: false,
            screenshot_data: Arc::clone(&buffer),
            content_type: IMAGE_GIF.to_string(),
            data: buffer,
            size: fetched_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_result(original_size: u64) -> GifResult {
        GifResult {
            id: "gif-1".to_string(),
            title: "Dog".to_string(),
            preview_url: "https://media.giphy.com/gif-1/preview.gif".to_string(),
            original_url: "https://media.giphy.com/gif-1/giphy.gif".to_string(),
            original_size,
            width: 200,
            height: 200,
        }
    }

    #[test]
    fn test_from_gif_builds_gif_typed_draft() {
        let draft = AttachmentDraft::from_gif(&create_result(4), vec![1, 2, 3, 4]);

        assert_eq!(draft.url, "https://media.giphy.com/gif-1/giphy.gif");
        assert_eq!(draft.content_type, IMAGE_GIF);
        assert!(!draft.pending);
        assert_eq!(&*draft.data, &[1, 2, 3, 4]);
        assert_eq!(draft.size, 4);
    }

    #[test]
    fn test_from_gif_shares_buffer_between_data_and_screenshot() {
        let draft = AttachmentDraft::from_gif(&create_result(3), vec![9, 9, 9]);

        assert!(Arc::ptr_eq(&draft.data, &draft.screenshot_data));
    }

    #[test]
    fn test_from_gif_prefers_fetched_length_over_reported_size() {
        let draft = AttachmentDraft::from_gif(&create_result(999_999), vec![0u8; 10]);

        assert_eq!(draft.size, 10);
        assert_eq!(draft.data.len() as u64, draft.size);
    }
}
