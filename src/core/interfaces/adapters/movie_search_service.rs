use async_trait::async_trait;

use crate::core::models::{Movie, SearchError};

/// One call issues one request and resolves exactly once.
#[async_trait]
pub trait MovieSearchService: Send + Sync {
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, SearchError>;
}
