#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use mailscreen_application::ports::{ApiRequest, HttpFetcher, VerdictCache};
use mailscreen_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock VerdictCache
// ============================================================================

pub struct MockVerdictCache {
    entries: Arc<RwLock<HashMap<String, i64>>>,
    writes: Arc<RwLock<Vec<(String, i64, Duration)>>>,
    get_count: Arc<AtomicU64>,
}

impl MockVerdictCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            writes: Arc::new(RwLock::new(Vec::new())),
            get_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Seed a cache entry before the checker runs.
    pub async fn seed(&self, key: &str, value: i64) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    pub fn get_count(&self) -> u64 {
        self.get_count.load(Ordering::Relaxed)
    }

    /// Every write the checker performed, in order.
    pub async fn writes(&self) -> Vec<(String, i64, Duration)> {
        self.writes.read().await.clone()
    }
}

impl Default for MockVerdictCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerdictCache for MockVerdictCache {
    async fn get(&self, key: &str) -> Option<i64> {
        self.get_count.fetch_add(1, Ordering::Relaxed);
        self.entries.read().await.get(key).copied()
    }

    async fn set(&self, key: &str, value: i64, ttl: Duration) {
        self.writes
            .write()
            .await
            .push((key.to_string(), value, ttl));
        self.entries.write().await.insert(key.to_string(), value);
    }
}

// ============================================================================
// Mock HttpFetcher
// ============================================================================

pub struct MockHttpFetcher {
    body: Arc<RwLock<Bytes>>,
    should_fail: Arc<RwLock<bool>>,
    call_count: Arc<AtomicU64>,
    requests: Arc<RwLock<Vec<ApiRequest>>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self {
            body: Arc::new(RwLock::new(Bytes::new())),
            should_fail: Arc::new(RwLock::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fetcher that answers every request with `body`.
    pub fn with_body(body: &str) -> Self {
        let fetcher = Self::new();
        *fetcher.body.try_write().unwrap() = Bytes::from(body.to_string());
        fetcher
    }

    pub async fn set_body(&self, body: &str) {
        *self.body.write().await = Bytes::from(body.to_string());
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Every request the checker issued, in order.
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.read().await.clone()
    }
}

impl Default for MockHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<Bytes, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requests.write().await.push(request.clone());
        if *self.should_fail.read().await {
            return Err(DomainError::Network("API unreachable".to_string()));
        }
        Ok(self.body.read().await.clone())
    }
}
