use mailscreen_domain::address::obscure_local_part;
use mailscreen_domain::verdict::VERDICT_TTL;
use mailscreen_domain::{Config, DomainError, Verdict};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache_key;
use crate::debounce;
use crate::ports::{HttpFetcher, VerdictCache};

/// Checks whether an address is safe to use for transactional mail.
///
/// Flow: derive cache key, consult the cache, and on a miss ask the
/// validation API and cache any determinate verdict for a week. The
/// check is a gate in front of a larger workflow (typically user
/// registration), so every transient failure fails open: an outage of
/// the third party yields `Allow`, never an error.
pub struct CheckEmailUseCase {
    cache: Arc<dyn VerdictCache>,
    fetcher: Arc<dyn HttpFetcher>,
    config: Config,
}

impl CheckEmailUseCase {
    pub fn new(
        cache: Arc<dyn VerdictCache>,
        fetcher: Arc<dyn HttpFetcher>,
        config: Config,
    ) -> Self {
        Self {
            cache,
            fetcher,
            config,
        }
    }

    /// The only error is `DomainError::Unconfigured`, raised before any
    /// cache or network access when neither tier is usable. That is a
    /// deployment defect, not a per-address outcome, and is never
    /// cached.
    pub async fn execute(&self, address: &str) -> Result<Verdict, DomainError> {
        let api = &self.config.api;
        if !api.free_tier && api.api_key.is_empty() {
            return Err(DomainError::Unconfigured);
        }

        let key = cache_key::derive(address, &self.config.cache.secret_key);

        // A cached Block is honored as-is: no re-validation until the
        // entry expires.
        if let Some(cached) = self.cache.get(&key).await {
            let verdict = Verdict::from_cache_value(cached);
            debug!(?verdict, "Cached verdict hit, skipping API lookup");
            return Ok(verdict);
        }

        let request = if api.free_tier {
            debounce::disposable_check(address)
        } else if api.privacy_mode {
            // only the domain portion leaves the installation
            debounce::transactional_check(&api.api_key, &obscure_local_part(address))
        } else {
            debounce::transactional_check(&api.api_key, address)
        };

        let verdict = match self.fetcher.get(&request).await {
            Ok(body) => {
                let verdict = if api.free_tier {
                    debounce::interpret_disposable(&body)
                } else {
                    debounce::interpret_transactional(&body)
                };
                if verdict.is_none() {
                    debug!("Unrecognized API response, treating as indeterminate");
                }
                verdict
            }
            Err(e) => {
                warn!(error = %e, "Validation API unavailable, allowing address");
                None
            }
        };

        match verdict {
            Some(verdict) => {
                self.cache
                    .set(&key, verdict.cache_value(), VERDICT_TTL)
                    .await;
                info!(?verdict, "Address verdict cached");
                Ok(verdict)
            }
            // indeterminate: fail open, and leave the cache alone so
            // the next miss tries again
            None => Ok(Verdict::Allow),
        }
    }
}
