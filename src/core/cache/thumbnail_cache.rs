use dashmap::DashMap;

use crate::core::models::ThumbnailImage;

/// Poster images keyed by absolute URL.
///
/// Unbounded, no TTL. Entries live as long as the cache does, so whoever owns
/// the cache decides its lifetime. Concurrent inserts for one URL are allowed
/// and the last write wins.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: DashMap<String, ThumbnailImage>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<ThumbnailImage> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, url: impl Into<String>, image: ThumbnailImage) {
        let url = url.into();
        if self.entries.insert(url.clone(), image).is_some() {
            log::debug!("[CACHE] Replaced existing entry for {}", url);
        } else {
            log::debug!("[CACHE] Stored entry for {}", url);
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        log::info!("[CACHE] Clearing {} entries", self.entries.len());
        self.entries.clear();
    }
}
