use super::storage::TtlSubnetCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use tracing::debug;

/// Extension methods for TtlSubnetCache compaction
impl TtlSubnetCache {
    /// Physically remove every expired entry.
    ///
    /// Returns the number of entries removed.
    pub fn compact(&self) -> usize {
        let mut removed = 0;

        self.cache.retain(|_key, entry| {
            if entry.is_expired() {
                removed += 1;
                false
            } else {
                true
            }
        });

        self.metrics.compactions.fetch_add(1, AtomicOrdering::Relaxed);

        if removed > 0 {
            self.metrics
                .evictions
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);

            debug!(
                removed,
                cache_size = self.cache.len(),
                "Subnet cache compaction completed"
            );
        }

        removed
    }

    /// Number of compaction passes run so far.
    pub fn compaction_count(&self) -> u64 {
        self.metrics.compactions.load(AtomicOrdering::Relaxed)
    }
}
