//! HTTP fetch client for the product API.

use serde::de::DeserializeOwned;

use pocketshop_commerce::CommerceError;

/// Default product API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },
}

impl From<CommerceError> for FetchError {
    fn from(e: CommerceError) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Client for the product API.
///
/// Issues plain `GET` requests with no auth headers, no timeout and no retry.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Create a new fetch client for an API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path under the API root.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetch raw response bytes for a path.
    pub async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url(path);

        let resp = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::Connection(e.to_string())
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        // Check for HTTP errors
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Fetch and decode a JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let bytes = self.fetch_bytes(path).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = FetchClient::new("https://example.test/api/");
        assert_eq!(client.url("/products"), "https://example.test/api/products");
        assert_eq!(client.url("products"), "https://example.test/api/products");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(FetchClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Port 9 on loopback (discard) is closed on test machines.
        let client = FetchClient::new("http://127.0.0.1:9");
        let err = client
            .fetch::<serde_json::Value>("/products")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FetchError::Connection(_) | FetchError::Request(_)
        ));
    }
}
