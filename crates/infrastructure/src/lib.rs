//! Mailscreen Infrastructure Layer
pub mod cache;
pub mod http;

pub use cache::MemoryVerdictCache;
pub use http::ReqwestFetcher;
