use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::interfaces::adapters::AttachmentSink;
use crate::core::models::AttachmentDraft;

/// Per-conversation staging area for attachments that have not been sent yet.
#[derive(Default)]
pub struct ComposerDraftStore {
    drafts: Mutex<HashMap<String, Vec<AttachmentDraft>>>,
}

impl ComposerDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachments(&self, conversation_id: &str) -> Vec<AttachmentDraft> {
        match self.drafts.lock() {
            Ok(drafts) => drafts.get(conversation_id).cloned().unwrap_or_default(),
            Err(poisoned) => poisoned
                .into_inner()
                .get(conversation_id)
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub fn remove(&self, conversation_id: &str, index: usize) -> Option<AttachmentDraft> {
        let mut drafts = self.drafts.lock().unwrap_or_else(|e| e.into_inner());
        let list = drafts.get_mut(conversation_id)?;
        if index >= list.len() {
            return None;
        }
        let removed = list.remove(index);
        log::info!(
            "[DRAFTS] Removed {} from conversation {}",
            removed.url,
            conversation_id
        );
        Some(removed)
    }

    pub fn count(&self, conversation_id: &str) -> usize {
        self.drafts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(conversation_id)
            .map_or(0, Vec::len)
    }
}

impl AttachmentSink for ComposerDraftStore {
    fn add_attachment(&self, conversation_id: &str, attachment: AttachmentDraft) {
        log::info!(
            "[DRAFTS] Staged {} ({}, {} bytes) for conversation {}",
            attachment.url,
            attachment.content_type,
            attachment.size,
            conversation_id
        );
        self.drafts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(conversation_id.to_string())
            .or_default()
            .push(attachment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GifResult;

    fn create_draft(id: &str) -> AttachmentDraft {
        let result = GifResult {
            id: id.to_string(),
            title: String::new(),
            preview_url: format!("https://media.test/{}/preview.gif", id),
            original_url: format!("https://media.test/{}/giphy.gif", id),
            original_size: 3,
            width: 1,
            height: 1,
        };
        AttachmentDraft::from_gif(&result, vec![1, 2, 3])
    }

    #[test]
    fn test_add_attachment_is_scoped_per_conversation() {
        let store = ComposerDraftStore::new();

        store.add_attachment("conv-1", create_draft("a"));
        store.add_attachment("conv-1", create_draft("b"));
        store.add_attachment("conv-2", create_draft("c"));

        assert_eq!(store.count("conv-1"), 2);
        assert_eq!(store.count("conv-2"), 1);
        assert_eq!(store.count("conv-3"), 0);
        assert_eq!(
            store.attachments("conv-1")[1].url,
            "https://media.test/b/giphy.gif"
        );
    }

    #[test]
    fn test_remove_drops_attachment_by_index() {
        let store = ComposerDraftStore::new();
        store.add_attachment("conv-1", create_draft("a"));
        store.add_attachment("conv-1", create_draft("b"));

        let removed = store.remove("conv-1", 0).unwrap();

        assert_eq!(removed.url, "https://media.test/a/giphy.gif");
        assert_eq!(store.count("conv-1"), 1);
        assert!(store.remove("conv-1", 5).is_none());
        assert!(store.remove("conv-9", 0).is_none());
    }
}
