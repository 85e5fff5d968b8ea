use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cache.secret_key must be set")]
    MissingSecretKey,

    #[error("Neither api.free_tier nor api.api_key is configured")]
    MissingCredentials,
}
