use async_trait::async_trait;

use crate::core::models::Thumbnail;

#[async_trait]
pub trait ThumbnailLoader: Send + Sync {
    /// Never fails: any fetch or decode problem yields `Thumbnail::Placeholder`.
    async fn load_thumbnail(&self, url: &str) -> Thumbnail;
}
