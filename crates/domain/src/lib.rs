//! Mailscreen Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod verdict;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use verdict::Verdict;
