mod thumbnail_cache;

pub use thumbnail_cache::ThumbnailCache;
