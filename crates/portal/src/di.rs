use anyhow::{Context, Result};
use shared::{
    abstract_trait::{
        DynAccountRepository, DynComplianceService, DynDocumentRepository, DynDocumentService,
        DynHashing, DynPortfolioService, DynSessionStore,
    },
    config::{Config, Hashing, SESSION_TTL},
    repository::{
        AccountRepository, ComplianceRepository, DocumentRepository, PortfolioRepository,
        SessionRepository, seed,
    },
    service::{ComplianceService, DocumentService, PortfolioService, SessionStore, SessionStoreDeps},
    utils::{Metrics, MockLatency},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub session_store: DynSessionStore,
    pub document_service: DynDocumentService,
    pub compliance_service: DynComplianceService,
    pub portfolio_service: DynPortfolioService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("session_store", &"DynSessionStore")
            .field("document_service", &"DynDocumentService")
            .field("compliance_service", &"DynComplianceService")
            .field("portfolio_service", &"DynPortfolioService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(config: &Config, metrics: Metrics) -> Result<Self> {
        let latency = MockLatency::new(config.mock.clone());
        let hashing: DynHashing = Arc::new(Hashing::new());

        let accounts = seed::demo_accounts(&hashing)
            .await
            .context("Failed to seed demo accounts")?;
        let accounts: DynAccountRepository = Arc::new(AccountRepository::with_accounts(accounts));

        let session_store: DynSessionStore = Arc::new(SessionStore::new(SessionStoreDeps {
            sessions: Arc::new(SessionRepository::new(SESSION_TTL)),
            accounts,
            hashing,
            latency: latency.clone(),
            metrics: metrics.clone(),
            signup_completes_onboarding: config.signup_completes_onboarding,
        }));

        let documents: DynDocumentRepository =
            Arc::new(DocumentRepository::new(seed::documents()));

        let document_service: DynDocumentService = Arc::new(DocumentService::new(
            documents.clone(),
            latency.clone(),
            metrics.clone(),
        ));

        let compliance_service: DynComplianceService = Arc::new(ComplianceService::new(
            Arc::new(ComplianceRepository::new(
                seed::compliance_tasks(),
                seed::company(),
            )),
            documents,
            latency.clone(),
            metrics.clone(),
        ));

        let portfolio_service: DynPortfolioService = Arc::new(PortfolioService::new(
            Arc::new(PortfolioRepository::new(seed::portfolio())),
            latency,
            metrics,
        ));

        Ok(Self {
            session_store,
            document_service,
            compliance_service,
            portfolio_service,
        })
    }
}
