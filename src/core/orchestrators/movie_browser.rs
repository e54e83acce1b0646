use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::adapters::{CachedThumbnailLoader, ReqwestHttpFetcher, TmdbMovieSearchService};
use crate::core::cache::ThumbnailCache;
use crate::core::interfaces::adapters::{HttpFetcher, MovieSearchService, ThumbnailLoader};
use crate::core::models::{Movie, MovieApiSettings, SearchError, Thumbnail};

/// Composes the search service and the thumbnail loader and owns the
/// thumbnail cache they share.
///
/// Searches are not cancelled or sequenced: if two searches overlap, whichever
/// completes last replaces the stored movie list, even if it was issued first.
#[derive(Clone)]
pub struct MovieBrowser {
    search_service: Arc<dyn MovieSearchService>,
    thumbnail_loader: Arc<dyn ThumbnailLoader>,
    thumbnail_cache: Arc<ThumbnailCache>,
    image_base_url: String,
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieBrowser {
    pub fn build(
        search_service: Arc<dyn MovieSearchService>,
        thumbnail_loader: Arc<dyn ThumbnailLoader>,
        thumbnail_cache: Arc<ThumbnailCache>,
        image_base_url: String,
    ) -> Self {
        Self {
            search_service,
            thumbnail_loader,
            thumbnail_cache,
            image_base_url,
            movies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn build_with_fetcher(http_fetcher: Arc<dyn HttpFetcher>, settings: MovieApiSettings) -> Self {
        let thumbnail_cache = Arc::new(ThumbnailCache::new());
        let image_base_url = settings.image_base_url.clone();

        let search_service = Arc::new(TmdbMovieSearchService::new(
            Arc::clone(&http_fetcher),
            settings,
        ));
        let thumbnail_loader = Arc::new(CachedThumbnailLoader::new(
            http_fetcher,
            Arc::clone(&thumbnail_cache),
        ));

        Self::build(
            search_service,
            thumbnail_loader,
            thumbnail_cache,
            image_base_url,
        )
    }

    pub fn build_from_settings(settings: MovieApiSettings) -> Self {
        Self::build_with_fetcher(Arc::new(ReqwestHttpFetcher::new()), settings)
    }

    pub fn is_searchable_query(query: &str) -> bool {
        !query.trim().is_empty()
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        if !Self::is_searchable_query(query) {
            log::debug!("[BROWSER] Blank query, clearing movies");
            self.movies.write().clear();
            return Err(SearchError::EmptyQuery);
        }

        let movies = self.search_service.search_movies(query).await?;
        *self.movies.write() = movies.clone();

        log::info!("[BROWSER] Showing {} movies", movies.len());
        Ok(movies)
    }

    /// Runs `search` on the tokio runtime and hands the result to `on_complete`
    /// exactly once. The callback runs on a runtime task, not on the caller's
    /// thread. Must be called from within a tokio runtime. If the runtime shuts
    /// down before the task finishes, the task is dropped and `on_complete`
    /// never runs.
    pub fn spawn_search<F>(&self, query: String, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Movie>, SearchError>) + Send + 'static,
    {
        let browser = self.clone();
        tokio::spawn(async move {
            let result = browser.search(&query).await;
            on_complete(result);
        })
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.movies.read().clone()
    }

    pub fn poster_url(&self, movie: &Movie) -> Option<String> {
        movie.poster_url(&self.image_base_url)
    }

    pub async fn load_thumbnail(&self, url: &str) -> Thumbnail {
        self.thumbnail_loader.load_thumbnail(url).await
    }

    /// Same delivery contract as `spawn_search`.
    pub fn spawn_thumbnail<F>(&self, url: String, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Thumbnail) + Send + 'static,
    {
        let thumbnail_loader = Arc::clone(&self.thumbnail_loader);
        tokio::spawn(async move {
            let thumbnail = thumbnail_loader.load_thumbnail(&url).await;
            on_complete(thumbnail);
        })
    }

    pub async fn load_poster(&self, movie: &Movie) -> Thumbnail {
        match self.poster_url(movie) {
            Some(url) => self.load_thumbnail(&url).await,
            None => Thumbnail::Placeholder,
        }
    }

    /// Loads every poster concurrently; the output lines up with `movies`.
    pub async fn load_posters(&self, movies: &[Movie]) -> Vec<Thumbnail> {
        join_all(movies.iter().map(|movie| self.load_poster(movie))).await
    }

    pub fn thumbnail_cache(&self) -> &Arc<ThumbnailCache> {
        &self.thumbnail_cache
    }
}
