use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_application::ports::LookupContext;
use subnet_resolver_application::services::SubnetResolver;
use subnet_resolver_domain::{DomainError, SubnetSelector};
use subnet_resolver_infrastructure::{InventorySubnetLookup, TtlSubnetCache};
use tokio::time::advance;

mod helpers;
use helpers::{fingerprint_for, sample_inventory};

fn setup(
    ttl: Duration,
) -> (
    Arc<InventorySubnetLookup>,
    Arc<TtlSubnetCache>,
    SubnetResolver,
) {
    let lookup = Arc::new(InventorySubnetLookup::new(sample_inventory()));
    let cache = Arc::new(TtlSubnetCache::new());
    let resolver = SubnetResolver::new(lookup.clone(), cache.clone()).with_cache_ttl(ttl);
    (lookup, cache, resolver)
}

#[tokio::test(start_paused = true)]
async fn test_repeat_within_ttl_is_served_from_cache() {
    let (lookup, cache, resolver) = setup(Duration::from_secs(60));
    let selector = SubnetSelector::new().with("env", "prod");
    let ctx = LookupContext::new();

    let first = resolver.resolve(&ctx, &selector).await.unwrap();
    advance(Duration::from_secs(30)).await;
    let second = resolver.resolve(&ctx, &selector).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(lookup.call_count(), 1);
    assert_eq!(cache.stats().hits, 1);
}

#[tokio::test(start_paused = true)]
async fn test_resolve_after_ttl_calls_lookup_again() {
    let (lookup, _cache, resolver) = setup(Duration::from_secs(60));
    let selector = SubnetSelector::new().with("env", "prod");
    let ctx = LookupContext::new();

    resolver.resolve(&ctx, &selector).await.unwrap();
    advance(Duration::from_secs(61)).await;
    resolver.resolve(&ctx, &selector).await.unwrap();

    assert_eq!(lookup.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_after_ttl_sees_inventory_changes() {
    let (lookup, _cache, resolver) = setup(Duration::from_secs(60));
    let selector = SubnetSelector::new().with("env", "prod");
    let ctx = LookupContext::new();

    assert_eq!(resolver.resolve(&ctx, &selector).await.unwrap().len(), 2);

    lookup.replace(sample_inventory().into_iter().take(1).collect()).await;
    assert_eq!(resolver.resolve(&ctx, &selector).await.unwrap().len(), 2);

    advance(Duration::from_secs(61)).await;
    assert_eq!(resolver.resolve(&ctx, &selector).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_no_match_leaves_no_entry() {
    let (_lookup, cache, resolver) = setup(Duration::from_secs(60));
    let selector = SubnetSelector::new().with("env", "staging");

    let result = resolver.resolve(&LookupContext::new(), &selector).await;

    assert!(matches!(result, Err(DomainError::NoMatch { .. })));
    assert!(!cache.contains(&fingerprint_for(&selector)));
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_explicit_id_resolves_single_subnet() {
    let (_lookup, cache, resolver) = setup(Duration::from_secs(60));

    let selector = SubnetSelector::new().with("subnet-id", "subnet-0a1");
    let subnets = resolver
        .resolve(&LookupContext::new(), &selector)
        .await
        .unwrap();

    assert_eq!(subnets[0].availability_zone, "us-west-2a");
    assert_eq!(cache.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_share_one_entry() {
    let (_lookup, cache, resolver) = setup(Duration::from_secs(60));
    let resolver = Arc::new(resolver);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            tokio::spawn(async move {
                resolver
                    .resolve(
                        &LookupContext::new(),
                        &SubnetSelector::new().with("kubernetes.io/cluster/main", "*"),
                    )
                    .await
            })
        })
        .collect();

    for result in futures::future::join_all(tasks).await {
        assert_eq!(result.unwrap().unwrap().len(), 2);
    }

    assert_eq!(cache.len(), 1);
}
