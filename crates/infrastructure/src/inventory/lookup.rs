use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use subnet_resolver_application::ports::{LookupContext, SubnetLookup};
use subnet_resolver_domain::{DomainError, FilterSet, Subnet};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::matcher::FilterMatcher;

/// On-disk inventory format: `{"subnets": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

/// Lookup collaborator answering from an in-memory subnet inventory.
pub struct InventorySubnetLookup {
    subnets: Arc<RwLock<Vec<Subnet>>>,
    call_count: AtomicU64,
}

impl InventorySubnetLookup {
    pub fn new(subnets: Vec<Subnet>) -> Self {
        Self {
            subnets: Arc::new(RwLock::new(subnets)),
            call_count: AtomicU64::new(0),
        }
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::Inventory(format!("failed to read {}: {e}", path.display()))
        })?;

        let inventory: Inventory = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Inventory(format!("failed to parse {}: {e}", path.display()))
        })?;

        info!(
            path = %path.display(),
            subnets = inventory.subnets.len(),
            "Subnet inventory loaded"
        );

        Ok(Self::new(inventory.subnets))
    }

    /// Swap in a new inventory, e.g. after subnets were created.
    pub async fn replace(&self, subnets: Vec<Subnet>) {
        *self.subnets.write().await = subnets;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SubnetLookup for InventorySubnetLookup {
    async fn list_subnets(
        &self,
        ctx: &LookupContext,
        filters: &FilterSet,
    ) -> Result<Vec<Subnet>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if ctx.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let matcher = FilterMatcher::compile(filters)?;
        let subnets = self.subnets.read().await;
        let matched: Vec<Subnet> = subnets
            .iter()
            .filter(|subnet| matcher.matches(subnet))
            .cloned()
            .collect();

        debug!(
            filters = %filters,
            inventory = subnets.len(),
            matched = matched.len(),
            "Inventory lookup completed"
        );

        Ok(matched)
    }
}
