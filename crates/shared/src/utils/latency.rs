use crate::{config::MockConfig, errors::ServiceError};
use rand::Rng;
use std::time::Duration;
use tracing::warn;

/// Stand-in for the network round trip every mock mutation pays.
#[derive(Debug, Clone)]
pub struct MockLatency {
    config: MockConfig,
}

impl MockLatency {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    pub fn identity_resolve(&self) -> Duration {
        self.config.identity_resolve
    }

    pub async fn simulate(&self, operation: &'static str) -> Result<(), ServiceError> {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let rate = self.config.failure_rate.clamp(0.0, 1.0);
        let failed = rate > 0.0 && rand::rng().random_bool(rate);

        if failed {
            warn!("Injected failure during {operation}");
            return Err(ServiceError::Simulated(operation));
        }

        Ok(())
    }
}
