use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, JwtConfig},
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let metrics = Metrics::new();

        let mut registry = Registry::default();
        metrics.register(&mut registry);

        info!(
            "Mock backend: latency {:?}, identity resolve {:?}, failure rate {}",
            config.mock.latency, config.mock.identity_resolve, config.mock.failure_rate
        );

        let di_container = DependenciesInject::new(config, metrics.clone())
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            jwt_config,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        })
    }
}
