use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_application::ports::{CacheStats, SubnetCache};
use subnet_resolver_domain::{Fingerprint, Subnet};
use tracing::{debug, info};

use super::{CacheMetrics, CachedSubnets};

const SHARD_AMOUNT: usize = 16;

/// Expiring fingerprint → subnets cache.
///
/// Expired entries are never served. They are dropped lazily when a lookup
/// trips over them and in bulk by [`TtlSubnetCache::compact`], which the
/// background sweep job calls on a fixed interval.
pub struct TtlSubnetCache {
    pub(super) cache: Arc<DashMap<Fingerprint, CachedSubnets, FxBuildHasher>>,
    pub(super) metrics: Arc<CacheMetrics>,
}

impl TtlSubnetCache {
    pub fn new() -> Self {
        info!("Initializing subnet cache");

        let cache: DashMap<Fingerprint, CachedSubnets, FxBuildHasher> =
            DashMap::with_hasher_and_shard_amount(FxBuildHasher::default(), SHARD_AMOUNT);

        Self {
            cache: Arc::new(cache),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> &Arc<CacheMetrics> {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn get(&self, key: &Fingerprint) -> Option<Arc<[Subnet]>> {
        let expired = match self.cache.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(Arc::clone(entry.subnets()));
            }
            Some(_) => true,
            None => false,
        };

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        if !expired {
            return None;
        }

        // Expired: drop it unless a fresh insert raced in after the read guard
        // was released.
        let removed = self
            .cache
            .remove_if(key, |_, entry| entry.is_expired())
            .is_some();
        if removed {
            self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(fingerprint = %key, "Evicted expired subnet entry on read");
        }
        None
    }

    pub fn insert(&self, key: Fingerprint, subnets: Arc<[Subnet]>, ttl: Duration) {
        self.cache.insert(key, CachedSubnets::new(subnets, ttl));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.cache.get(key).is_some_and(|entry| !entry.is_expired())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.metrics.evictions.load(AtomicOrdering::Relaxed),
        }
    }
}

impl Default for TtlSubnetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SubnetCache for TtlSubnetCache {
    fn get(&self, key: &Fingerprint) -> Option<Arc<[Subnet]>> {
        TtlSubnetCache::get(self, key)
    }

    fn set(&self, key: Fingerprint, subnets: Arc<[Subnet]>, ttl: Duration) {
        self.insert(key, subnets, ttl);
    }

    fn contains(&self, key: &Fingerprint) -> bool {
        TtlSubnetCache::contains(self, key)
    }

    fn remove_expired(&self) -> usize {
        self.compact()
    }

    fn len(&self) -> usize {
        self.cache.len()
    }

    fn stats(&self) -> CacheStats {
        TtlSubnetCache::stats(self)
    }
}
