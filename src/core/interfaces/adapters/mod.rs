mod http_fetcher;
mod movie_search_service;
mod thumbnail_loader;

pub use http_fetcher::{HttpFetcher, HttpResponse};
pub use movie_search_service::MovieSearchService;
pub use thumbnail_loader::ThumbnailLoader;

#[cfg(test)]
pub(crate) use http_fetcher::mock;
