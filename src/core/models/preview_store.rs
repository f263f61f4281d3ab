use std::collections::HashMap;
use std::fmt;

use iced::widget::image;
use uuid::Uuid;

use crate::global_constants;

/// Revocable local reference to preview bytes held in a [`PreviewStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default)]
pub struct PreviewStore {
    entries: HashMap<ObjectUrl, image::Handle>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, bytes: Vec<u8>) -> ObjectUrl {
        let url = ObjectUrl(format!(
            "{}{}",
            global_constants::OBJECT_URL_PREFIX,
            Uuid::new_v4()
        ));
        log::debug!(
            "[PREVIEWS] Created {} for {} bytes",
            url,
            bytes.len()
        );
        self.entries
            .insert(url.clone(), image::Handle::from_bytes(bytes));
        url
    }

    pub fn resolve(&self, url: &ObjectUrl) -> Option<&image::Handle> {
        self.entries.get(url)
    }

    pub fn revoke(&mut self, url: &ObjectUrl) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn revoke_all(&mut self) -> usize {
        let revoked = self.entries.len();
        self.entries.clear();
        if revoked > 0 {
            log::debug!("[PREVIEWS] Revoked {} object urls", revoked);
        }
        revoked
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for PreviewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewStore")
            .field("live", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mints_unique_blob_urls() {
        let mut store = PreviewStore::new();

        let first = store.create(vec![1, 2, 3]);
        let second = store.create(vec![1, 2, 3]);

        assert_ne!(first, second);
        assert!(first.as_str().starts_with("blob:gif-picker/"));
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn test_revoke_releases_single_url() {
        let mut store = PreviewStore::new();
        let url = store.create(vec![0u8; 16]);

        assert!(store.resolve(&url).is_some());
        assert!(store.revoke(&url));
        assert!(store.resolve(&url).is_none());
        assert!(!store.revoke(&url));
    }

    #[test]
    fn test_revoke_all_empties_store() {
        let mut store = PreviewStore::new();
        store.create(vec![1]);
        store.create(vec![2]);
        store.create(vec![3]);

        assert_eq!(store.revoke_all(), 3);
        assert_eq!(store.live_count(), 0);
    }
}
