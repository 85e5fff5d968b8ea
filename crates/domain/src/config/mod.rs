//! Configuration module for Mailscreen
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `api`: Third-party validation API settings
//! - `cache`: Verdict cache settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod api;
pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;

pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
