use std::sync::Arc;
use subnet_resolver_domain::{DomainError, Subnet, SubnetSelector};
use tracing::{info, instrument};

use crate::ports::LookupContext;
use crate::services::SubnetResolver;

pub struct ResolveSubnetsUseCase {
    resolver: Arc<SubnetResolver>,
}

impl ResolveSubnetsUseCase {
    pub fn new(resolver: Arc<SubnetResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, ctx), fields(selector = %selector))]
    pub async fn execute(
        &self,
        ctx: &LookupContext,
        selector: &SubnetSelector,
    ) -> Result<Arc<[Subnet]>, DomainError> {
        let subnets = self.resolver.resolve(ctx, selector).await?;
        info!(count = subnets.len(), "Subnets resolved");
        Ok(subnets)
    }

    /// Resolve from raw `key=value` pairs, in the order given.
    pub async fn execute_pairs(
        &self,
        ctx: &LookupContext,
        pairs: &[String],
    ) -> Result<Arc<[Subnet]>, DomainError> {
        let selector = pairs
            .iter()
            .map(|raw| SubnetSelector::parse_pair(raw))
            .collect::<Result<SubnetSelector, _>>()?;

        if selector.is_empty() {
            return Err(DomainError::InvalidSelector(
                "at least one key=value pair is required".to_string(),
            ));
        }

        self.execute(ctx, &selector).await
    }
}
