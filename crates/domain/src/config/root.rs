use serde::{Deserialize, Serialize};

use super::{ApiConfig, CacheConfig, ConfigError, LoggingConfig};

/// Top-level configuration, loaded from a TOML file with CLI overrides
/// applied on top.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub free_tier: Option<bool>,
    pub privacy_mode: Option<bool>,
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from `path` (defaults when absent) and apply
    /// CLI overrides. Validation is a separate step so callers can
    /// distinguish unreadable files from unusable settings.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .map_err(|e| ConfigError::Io(p.to_string(), e))?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(api_key) = overrides.api_key {
            self.api.api_key = api_key;
        }
        if let Some(free_tier) = overrides.free_tier {
            self.api.free_tier = free_tier;
        }
        if let Some(privacy_mode) = overrides.privacy_mode {
            self.api.privacy_mode = privacy_mode;
        }
        if let Some(secret_key) = overrides.secret_key {
            self.cache.secret_key = secret_key;
        }
    }

    /// Reject configurations the checker cannot run with. Called once
    /// at startup; the checker re-checks the credential invariant per
    /// call as a precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.secret_key.is_empty() {
            return Err(ConfigError::MissingSecretKey);
        }
        if !self.api.free_tier && self.api.api_key.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }
}
