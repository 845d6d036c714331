use async_trait::async_trait;
use std::time::Duration;
use subnet_resolver_domain::{DomainError, FilterSet, Subnet};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Roughly 30 years; stands in for deadlines that overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// `now + timeout`, saturating to a far-future instant instead of overflowing.
pub fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Cancellation and deadline carried through a resolve call.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl LookupContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Set a deadline `timeout` from now. An earlier existing deadline wins.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(deadline_after(timeout))
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Provider call listing the subnets that match a filter set.
///
/// Returns the complete result in one call; any paging is the implementation's
/// concern.
#[async_trait]
pub trait SubnetLookup: Send + Sync {
    async fn list_subnets(
        &self,
        ctx: &LookupContext,
        filters: &FilterSet,
    ) -> Result<Vec<Subnet>, DomainError>;
}
