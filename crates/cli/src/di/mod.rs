use mailscreen_application::use_cases::CheckEmailUseCase;
use mailscreen_domain::Config;
use mailscreen_infrastructure::{MemoryVerdictCache, ReqwestFetcher};
use std::sync::Arc;

/// Wire the production adapters into the checker use case.
pub fn build_checker(config: &Config) -> CheckEmailUseCase {
    let cache = Arc::new(MemoryVerdictCache::new());
    let fetcher = Arc::new(ReqwestFetcher::new());
    CheckEmailUseCase::new(cache, fetcher, config.clone())
}
