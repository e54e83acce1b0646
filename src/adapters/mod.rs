mod cached_thumbnail_loader;
mod reqwest_http_fetcher;
mod tmdb_movie_search_service;

pub use cached_thumbnail_loader::CachedThumbnailLoader;
pub use reqwest_http_fetcher::ReqwestHttpFetcher;
pub use tmdb_movie_search_service::TmdbMovieSearchService;
