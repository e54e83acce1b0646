use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::core::interfaces::adapters::{HttpFetcher, HttpResponse};
use crate::core::models::TransportError;

/// `HttpFetcher` backed by a shared `reqwest::Client`. No timeout is set, so
/// requests use the client's defaults.
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("[HTTP] GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| TransportError::request(url, error.without_url()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|error| TransportError::request(url, error.without_url()))?;

        log::debug!("[HTTP] {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}
