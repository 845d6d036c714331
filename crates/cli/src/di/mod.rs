use anyhow::Context;
use std::sync::Arc;
use subnet_resolver_application::services::SubnetResolver;
use subnet_resolver_application::use_cases::ResolveSubnetsUseCase;
use subnet_resolver_domain::Config;
use subnet_resolver_infrastructure::{InventorySubnetLookup, TtlSubnetCache};
use tracing::info;

/// Wired services for one process.
pub struct Services {
    pub lookup: Arc<InventorySubnetLookup>,
    pub cache: Arc<TtlSubnetCache>,
    pub resolver: Arc<SubnetResolver>,
    pub resolve_subnets: Arc<ResolveSubnetsUseCase>,
}

impl Services {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let inventory_path = config
            .inventory
            .path
            .as_deref()
            .context("no inventory configured; pass --inventory or set [inventory] path")?;

        let lookup = Arc::new(InventorySubnetLookup::from_file(inventory_path).await?);
        let cache = Arc::new(TtlSubnetCache::new());

        let resolver = Arc::new(
            SubnetResolver::new(lookup.clone(), cache.clone())
                .with_cache_ttl(config.resolver.cache_ttl())
                .with_lookup_timeout(config.resolver.lookup_timeout()),
        );
        let resolve_subnets = Arc::new(ResolveSubnetsUseCase::new(resolver.clone()));

        info!(
            cache_ttl_secs = config.resolver.cache_ttl_secs,
            lookup_timeout_secs = config.resolver.lookup_timeout_secs,
            "Subnet resolver ready"
        );

        Ok(Self {
            lookup,
            cache,
            resolver,
            resolve_subnets,
        })
    }
}
