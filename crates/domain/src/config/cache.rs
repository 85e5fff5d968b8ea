use serde::{Deserialize, Serialize};

/// Verdict cache settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Stable per-installation secret used to derive cache keys, so
    /// keys are not guessable from plaintext addresses. Required.
    #[serde(default)]
    pub secret_key: String,
}
