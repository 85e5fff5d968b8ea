use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Neither the free tier nor an API key is configured. The only
    /// error the checker surfaces to its caller; everything transient
    /// collapses to an allow verdict instead.
    #[error("Email validation is not configured: set api.free_tier or api.api_key")]
    Unconfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}
