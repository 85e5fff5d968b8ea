use async_trait::async_trait;
use std::time::Duration;

/// Port for the verdict cache. Any string key-value store with TTL
/// support satisfies it; the in-process implementation lives in the
/// infrastructure layer and is injected at DI time.
///
/// Values are integers rather than booleans so that an absent key and
/// a cached negative verdict stay distinguishable (`None` vs `Some(0)`).
#[async_trait]
pub trait VerdictCache: Send + Sync {
    /// The integer stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Option<i64>;

    /// Store `value` under `key` for `ttl`. A backend that drops the
    /// write just causes a re-validation on the next miss.
    async fn set(&self, key: &str, value: i64, ttl: Duration);
}
