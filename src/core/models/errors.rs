use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to obtain a successful HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: BoxedError,
    },
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl TransportError {
    pub fn request(url: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        TransportError::Request {
            url: url.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, SearchError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_url_and_code() {
        let error = TransportError::Status {
            url: "https://example.com/search".to_string(),
            status: 404,
        };

        let message = error.to_string();
        assert!(message.contains("https://example.com/search"));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_request_error_keeps_source() {
        let error = TransportError::request("https://example.com", "connection refused");

        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_transport_and_decode_are_distinguishable() {
        let transport: SearchError = TransportError::Status {
            url: "u".to_string(),
            status: 500,
        }
        .into();
        let decode: SearchError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();

        assert!(transport.is_transport() && !transport.is_decode());
        assert!(decode.is_decode() && !decode.is_transport());
    }
}
