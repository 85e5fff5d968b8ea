use async_trait::async_trait;
use bytes::Bytes;
use mailscreen_domain::DomainError;

/// A GET request to the validation API: an endpoint plus query
/// parameters. Query-string encoding is the adapter's job; the API
/// needs no headers or auth beyond these parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// The value of query parameter `name`, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Issue the GET and return the raw response body.
    async fn get(&self, request: &ApiRequest) -> Result<Bytes, DomainError>;
}
