use async_trait::async_trait;
use bytes::Bytes;
use mailscreen_application::ports::{ApiRequest, HttpFetcher};
use mailscreen_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Validation-API fetcher backed by the shared reqwest client.
///
/// Query-string encoding of the request parameters happens here, so
/// addresses with reserved characters survive the trip intact.
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<Bytes, DomainError> {
        debug!(endpoint = request.endpoint, "Sending validation API request");

        let response = SHARED_CLIENT
            .get(request.endpoint)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| {
                DomainError::Network(format!("request to {} failed: {e}", request.endpoint))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::InvalidResponse(format!(
                "{} returned HTTP {}: {}",
                request.endpoint,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response.bytes().await.map_err(|e| {
            DomainError::Network(format!(
                "reading body from {} failed: {e}",
                request.endpoint
            ))
        })
    }
}
