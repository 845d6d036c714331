use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_domain::config::resolver::{DEFAULT_CACHE_TTL_SECS, DEFAULT_LOOKUP_TIMEOUT_SECS};
use subnet_resolver_domain::{
    build_filters, summarize_subnets, DomainError, FilterSet, Subnet, SubnetSelector,
};
use tracing::debug;

use crate::ports::{deadline_after, CacheStats, LookupContext, SubnetCache, SubnetLookup};

/// Resolves selectors to subnets, serving repeats from an expiring cache.
///
/// Concurrent misses for the same selector are not collapsed; each performs
/// its own lookup and the last one to finish owns the cache slot.
pub struct SubnetResolver {
    lookup: Arc<dyn SubnetLookup>,
    cache: Arc<dyn SubnetCache>,
    cache_ttl: Duration,
    lookup_timeout: Duration,
}

impl SubnetResolver {
    pub fn new(lookup: Arc<dyn SubnetLookup>, cache: Arc<dyn SubnetCache>) -> Self {
        Self {
            lookup,
            cache,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Applied when the caller's context has no deadline of its own.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub async fn resolve(
        &self,
        ctx: &LookupContext,
        selector: &SubnetSelector,
    ) -> Result<Arc<[Subnet]>, DomainError> {
        let filters = build_filters(selector);
        let fingerprint = filters.fingerprint()?;

        if let Some(subnets) = self.cache.get(&fingerprint) {
            debug!(
                fingerprint = %fingerprint,
                count = subnets.len(),
                "Subnet cache HIT"
            );
            return Ok(subnets);
        }

        debug!(fingerprint = %fingerprint, filters = %filters, "Subnet cache MISS");

        let subnets = self.fetch(ctx, &filters).await.map_err(|e| match e {
            DomainError::Cancelled | DomainError::LookupTimeout => e,
            other => DomainError::upstream(filters.to_string(), other),
        })?;

        if subnets.is_empty() {
            return Err(DomainError::NoMatch {
                selector: selector.to_string(),
            });
        }

        let subnets: Arc<[Subnet]> = subnets.into();
        self.cache.set(fingerprint, Arc::clone(&subnets), self.cache_ttl);

        debug!(subnets = ?summarize_subnets(&subnets), "Discovered subnets");
        Ok(subnets)
    }

    async fn fetch(
        &self,
        ctx: &LookupContext,
        filters: &FilterSet,
    ) -> Result<Vec<Subnet>, DomainError> {
        if ctx.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let deadline = ctx
            .deadline()
            .unwrap_or_else(|| deadline_after(self.lookup_timeout));

        tokio::select! {
            biased;
            _ = ctx.cancellation().cancelled() => Err(DomainError::Cancelled),
            result = tokio::time::timeout_at(deadline, self.lookup.list_subnets(ctx, filters)) => {
                match result {
                    Ok(listed) => listed,
                    Err(_) => Err(DomainError::LookupTimeout),
                }
            }
        }
    }
}
