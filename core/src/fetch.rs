use std::time::Duration;

use async_trait::async_trait;

use crate::error::ThumbnailError;

/// HTTP GET capability used to retrieve source images.
///
/// A trait seam so tests can substitute a mock client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the response body.
    ///
    /// Transport failures and non-2xx statuses are both fetch errors;
    /// the message carries the URL and the cause or status for logging.
    async fn get(&self, url: &str) -> Result<Vec<u8>, ThumbnailError>;
}

/// Real HTTP client backed by reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the default 30 second timeout.
    pub fn new() -> Result<Self, ThumbnailError> {
        Self::with_timeout(30)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ThumbnailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ThumbnailError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ThumbnailError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ThumbnailError::Fetch(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThumbnailError::Fetch(format!("HTTP {} from {}", status, url)));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ThumbnailError::Fetch(format!("failed to read response from {}: {}", url, e)))
    }
}
