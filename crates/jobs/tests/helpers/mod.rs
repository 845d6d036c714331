#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_domain::{build_filters, Fingerprint, Subnet, SubnetSelector};
use subnet_resolver_infrastructure::TtlSubnetCache;

pub fn key(env: &str) -> Fingerprint {
    build_filters(&SubnetSelector::new().with("env", env))
        .fingerprint()
        .unwrap()
}

pub fn cache_with_entries(entries: &[(&str, u64)]) -> Arc<TtlSubnetCache> {
    let cache = Arc::new(TtlSubnetCache::new());
    for (env, ttl_secs) in entries {
        let subnets: Arc<[Subnet]> =
            vec![Subnet::new(format!("subnet-{env}"), "us-west-2a")].into();
        cache.insert(key(env), subnets, Duration::from_secs(*ttl_secs));
    }
    cache
}
