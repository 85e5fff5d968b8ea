use async_trait::async_trait;
use dashmap::DashMap;
use mailscreen_application::ports::VerdictCache;
use std::time::{Duration, Instant};

/// In-process verdict cache with per-entry TTL.
///
/// Entries expire lazily: an expired entry is removed on the `get` that
/// observes it. There is no background eviction; the working set is one
/// entry per distinct address checked within a week, which stays small
/// for the workloads this gate fronts. Deployments that share verdicts
/// across processes substitute a networked `VerdictCache` adapter.
pub struct MemoryVerdictCache {
    inner: DashMap<String, (i64, Instant, Duration)>,
}

impl MemoryVerdictCache {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for MemoryVerdictCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerdictCache for MemoryVerdictCache {
    async fn get(&self, key: &str) -> Option<i64> {
        if let Some(entry) = self.inner.get(key) {
            let (value, inserted_at, ttl) = *entry;
            if inserted_at.elapsed() < ttl {
                return Some(value);
            }
            // expired; the ref must be dropped before the remove
            drop(entry);
            self.inner.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: i64, ttl: Duration) {
        self.inner
            .insert(key.to_string(), (value, Instant::now(), ttl));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
