#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use subnet_resolver_application::ports::{CacheStats, LookupContext, SubnetCache, SubnetLookup};
use subnet_resolver_domain::{DomainError, FilterSet, Fingerprint, Subnet};
use tokio::sync::RwLock;

// ============================================================================
// Mock SubnetLookup
// ============================================================================

pub struct MockSubnetLookup {
    subnets: Arc<RwLock<Vec<Subnet>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Option<Duration>>>,
    last_filters: Arc<RwLock<Option<FilterSet>>>,
}

impl MockSubnetLookup {
    pub fn new() -> Self {
        Self::with_subnets(Vec::new())
    }

    pub fn with_subnets(subnets: Vec<Subnet>) -> Self {
        Self {
            subnets: Arc::new(RwLock::new(subnets)),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
            delay: Arc::new(RwLock::new(None)),
            last_filters: Arc::new(RwLock::new(None)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn set_subnets(&self, subnets: Vec<Subnet>) {
        *self.subnets.write().await = subnets;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn last_filters(&self) -> Option<FilterSet> {
        self.last_filters.read().await.clone()
    }
}

impl Default for MockSubnetLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubnetLookup for MockSubnetLookup {
    async fn list_subnets(
        &self,
        _ctx: &LookupContext,
        filters: &FilterSet,
    ) -> Result<Vec<Subnet>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_filters.write().await = Some(filters.clone());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.should_fail.read().await {
            return Err(DomainError::Inventory("mock lookup failed".to_string()));
        }

        Ok(self.subnets.read().await.clone())
    }
}

// ============================================================================
// Mock SubnetCache
// ============================================================================

pub struct MockSubnetCache {
    entries: Mutex<HashMap<Fingerprint, (Arc<[Subnet]>, Instant)>>,
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
}

impl MockSubnetCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            insertions: AtomicU64::new(0),
        }
    }
}

impl Default for MockSubnetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SubnetCache for MockSubnetCache {
    fn get(&self, key: &Fingerprint) -> Option<Arc<[Subnet]>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((subnets, expires_at)) if Instant::now() < *expires_at => {
                self.hits.fetch_add(1, Ordering::SeqCst);
                Some(Arc::clone(subnets))
            }
            _ => {
                self.misses.fetch_add(1, Ordering::SeqCst);
                None
            }
        }
    }

    fn set(&self, key: Fingerprint, subnets: Arc<[Subnet]>, ttl: Duration) {
        self.insertions.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(key, (subnets, Instant::now() + ttl));
    }

    fn contains(&self, key: &Fingerprint) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|(_, expires_at)| Instant::now() < *expires_at)
    }

    fn remove_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        let now = Instant::now();
        entries.retain(|_, (_, expires_at)| now < *expires_at);
        before - entries.len()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::SeqCst),
            misses: self.misses.load(Ordering::SeqCst),
            insertions: self.insertions.load(Ordering::SeqCst),
            evictions: 0,
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_subnet(id: &str, zone: &str) -> Subnet {
    Subnet::new(id, zone).with_tag("env", "prod")
}

pub fn prod_subnets() -> Vec<Subnet> {
    vec![
        make_subnet("subnet-0a1", "us-west-2a"),
        make_subnet("subnet-0b2", "us-west-2b"),
    ]
}
