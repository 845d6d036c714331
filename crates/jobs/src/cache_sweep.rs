use std::sync::Arc;
use std::time::Duration;
use subnet_resolver_application::ports::SubnetCache;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops expired subnet cache entries.
///
/// Expired entries are never served either way; the sweep only bounds how long
/// they occupy memory.
pub struct CacheSweepJob {
    cache: Arc<dyn SubnetCache>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<dyn SubnetCache>) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(600),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Run a single sweep, returning the number of entries removed.
    pub fn sweep_once(&self) -> usize {
        let removed = self.cache.remove_expired();
        if removed > 0 {
            info!(
                removed,
                remaining = self.cache.len(),
                "Expired subnet cache entries swept"
            );
        } else {
            debug!("No expired subnet cache entries");
        }
        removed
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting subnet cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            // The first tick completes immediately and there is nothing to sweep yet.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.sweep_once();
                    }
                }
            }
        })
    }
}
