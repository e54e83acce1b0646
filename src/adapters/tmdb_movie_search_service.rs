use async_trait::async_trait;
use std::sync::Arc;

use crate::core::interfaces::adapters::{HttpFetcher, MovieSearchService};
use crate::core::models::{Movie, MovieApiSettings, MoviesResponseBody, SearchError, TransportError};
use crate::global_constants;

pub struct TmdbMovieSearchService {
    http_fetcher: Arc<dyn HttpFetcher>,
    settings: MovieApiSettings,
}

impl TmdbMovieSearchService {
    pub fn new(http_fetcher: Arc<dyn HttpFetcher>, settings: MovieApiSettings) -> Self {
        Self {
            http_fetcher,
            settings,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}://{}{}",
            global_constants::DEFAULT_SEARCH_SCHEME,
            self.settings.search_host,
            self.settings.search_path
        )
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}?{}={}&{}={}",
            self.endpoint_url(),
            global_constants::QUERY_PARAM_API_KEY,
            urlencoding::encode(&self.settings.api_key),
            global_constants::QUERY_PARAM_QUERY,
            urlencoding::encode(query)
        )
    }

    fn decode_response_body(body: &[u8]) -> Result<Vec<Movie>, SearchError> {
        let envelope: MoviesResponseBody = serde_json::from_slice(body)?;
        Ok(envelope.results)
    }
}

#[async_trait]
impl MovieSearchService for TmdbMovieSearchService {
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        let search_url = self.construct_search_url(query);

        log::info!("[SEARCH] Searching movies for {:?}", query);

        let response = self.http_fetcher.get(&search_url).await.map_err(|error| {
            log::error!("[SEARCH] Request failed: {}", error);
            error
        })?;

        if !response.is_success() {
            log::error!("[SEARCH] Search endpoint returned HTTP {}", response.status);
            return Err(TransportError::Status {
                url: self.endpoint_url(),
                status: response.status,
            }
            .into());
        }

        let movies = Self::decode_response_body(&response.body).map_err(|error| {
            log::error!("[SEARCH] {}", error);
            error
        })?;

        log::info!("[SEARCH] Found {} movies for {:?}", movies.len(), query);
        Ok(movies)
    }
}
