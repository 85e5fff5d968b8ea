use serde::{Deserialize, Serialize};

/// Third-party validation API settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API key for the paid transactional-check endpoint (default: empty)
    #[serde(default)]
    pub api_key: String,

    /// Use the free disposable-check endpoint instead of the paid one.
    /// Takes precedence over `api_key` when both are set.
    #[serde(default)]
    pub free_tier: bool,

    /// Replace the local part of addresses with "example" before the
    /// paid lookup, so only the domain is disclosed
    #[serde(default)]
    pub privacy_mode: bool,
}
