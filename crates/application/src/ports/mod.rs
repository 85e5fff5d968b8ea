pub mod http_fetcher;
pub mod verdict_cache;

pub use http_fetcher::{ApiRequest, HttpFetcher};
pub use verdict_cache::VerdictCache;
