pub mod compaction;
pub mod entry;
pub mod metrics;
pub mod storage;

pub use entry::CachedSubnets;
pub use metrics::CacheMetrics;
pub use storage::TtlSubnetCache;
