use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_application::ports::deadline_after;
use subnet_resolver_domain::Subnet;
use tokio::time::Instant;

/// Cached lookup result. Expiry is fixed at insertion and never extended;
/// a TTL too large to represent never expires in practice.
#[derive(Debug, Clone)]
pub struct CachedSubnets {
    pub(super) subnets: Arc<[Subnet]>,
    pub(super) expires_at: Instant,
}

impl CachedSubnets {
    pub fn new(subnets: Arc<[Subnet]>, ttl: Duration) -> Self {
        Self {
            subnets,
            expires_at: deadline_after(ttl),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    pub fn subnets(&self) -> &Arc<[Subnet]> {
        &self.subnets
    }
}
