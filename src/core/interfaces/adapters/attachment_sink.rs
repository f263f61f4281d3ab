use crate::core::models::AttachmentDraft;

/// Host callback that takes ownership of a picked GIF.
pub trait AttachmentSink: Send + Sync {
    fn add_attachment(&self, conversation_id: &str, attachment: AttachmentDraft);
}
