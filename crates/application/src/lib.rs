//! Mailscreen Application Layer
pub mod cache_key;
pub mod debounce;
pub mod ports;
pub mod use_cases;

pub use use_cases::CheckEmailUseCase;
