use async_trait::async_trait;

use crate::core::models::TransportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET. Non-2xx statuses are returned as responses, only
/// failures to get any response at all are errors.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_status(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    #[test]
    fn test_is_success_covers_2xx_only() {
        assert!(response_with_status(200).is_success());
        assert!(response_with_status(204).is_success());
        assert!(!response_with_status(304).is_success());
        assert!(!response_with_status(404).is_success());
        assert!(!response_with_status(500).is_success());
    }
}
