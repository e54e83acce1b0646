use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::core::cache::ThumbnailCache;
use crate::core::interfaces::adapters::{HttpFetcher, HttpResponse, ThumbnailLoader};
use crate::core::models::{Thumbnail, ThumbnailImage};
use crate::global_constants;

/// Resolves poster thumbnails, memoizing successful loads by URL.
///
/// Concurrent loads of the same uncached URL each hit the network and the
/// last one to finish overwrites the cache entry.
pub struct CachedThumbnailLoader {
    http_fetcher: Arc<dyn HttpFetcher>,
    cache: Arc<ThumbnailCache>,
}

impl CachedThumbnailLoader {
    pub fn new(http_fetcher: Arc<dyn HttpFetcher>, cache: Arc<ThumbnailCache>) -> Self {
        Self {
            http_fetcher,
            cache,
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<ThumbnailImage> {
        let response = self.http_fetcher.get(url).await?;
        Self::ensure_image_response(&response)?;

        ThumbnailImage::build_from_bytes(response.body)
            .with_context(|| format!("Response from {} is not a valid image", url))
    }

    fn ensure_image_response(response: &HttpResponse) -> Result<()> {
        if !response.is_success() {
            anyhow::bail!("HTTP {}", response.status);
        }

        if let Some(content_type) = &response.content_type {
            if !content_type
                .to_ascii_lowercase()
                .starts_with(global_constants::IMAGE_CONTENT_TYPE_PREFIX)
            {
                anyhow::bail!("Unexpected content type {}", content_type);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ThumbnailLoader for CachedThumbnailLoader {
    async fn load_thumbnail(&self, url: &str) -> Thumbnail {
        if let Some(cached_image) = self.cache.get(url) {
            log::debug!("[THUMBNAIL] Cache hit for {}", url);
            return Thumbnail::Image(cached_image);
        }

        log::debug!("[THUMBNAIL] Cache miss, fetching {}", url);

        match self.fetch_image(url).await {
            Ok(image) => {
                self.cache.insert(url, image.clone());
                Thumbnail::Image(image)
            }
            Err(error) => {
                log::warn!("[THUMBNAIL] Using placeholder for {}: {:#}", url, error);
                Thumbnail::Placeholder
            }
        }
    }
}
