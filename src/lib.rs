//! Movie search client with a memoizing poster thumbnail loader.
//!
//! Results and thumbnails are delivered through futures or through callbacks
//! spawned on the tokio runtime. Callbacks may run on a runtime worker rather
//! than the caller's thread; marshaling back to a UI thread is up to the caller.

pub mod adapters;
pub mod core;
pub mod global_constants;

pub use crate::adapters::{CachedThumbnailLoader, ReqwestHttpFetcher, TmdbMovieSearchService};
pub use crate::core::cache::ThumbnailCache;
pub use crate::core::interfaces::adapters::{
    HttpFetcher, HttpResponse, MovieSearchService, ThumbnailLoader,
};
pub use crate::core::models::{
    Movie, MovieApiSettings, MoviesResponseBody, SearchError, Thumbnail, ThumbnailImage,
    TransportError,
};
pub use crate::core::orchestrators::MovieBrowser;
