use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_domain::{Fingerprint, Subnet};

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Expiring fingerprint → subnets store.
///
/// Entries expire a fixed duration after insertion regardless of access and
/// are replaced whole, never mutated. Implementations must be safe to share
/// between tasks.
pub trait SubnetCache: Send + Sync {
    /// Unexpired subnets for `key`, if any.
    fn get(&self, key: &Fingerprint) -> Option<Arc<[Subnet]>>;

    fn set(&self, key: Fingerprint, subnets: Arc<[Subnet]>, ttl: Duration);

    /// Like `get` but does not touch hit/miss counters.
    fn contains(&self, key: &Fingerprint) -> bool;

    /// Drop every expired entry, returning how many were removed.
    fn remove_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}
