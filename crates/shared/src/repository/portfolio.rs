use crate::{
    abstract_trait::PortfolioRepositoryTrait,
    errors::RepositoryError,
    model::{
        ClientDetails, ClientDocument, ClientSummary, ComplianceItem, FilingDeadline, TaskStatus,
    },
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A professional's client book: summaries, contact sheets, per-client
/// compliance items and documents.
pub struct PortfolioRepository {
    clients: Vec<ClientSummary>,
    details: HashMap<String, ClientDetails>,
    compliance: RwLock<HashMap<String, Vec<ComplianceItem>>>,
    documents: HashMap<String, Vec<ClientDocument>>,
    deadlines: Vec<FilingDeadline>,
}

pub struct PortfolioSeed {
    pub clients: Vec<ClientSummary>,
    pub details: Vec<ClientDetails>,
    pub compliance: HashMap<String, Vec<ComplianceItem>>,
    pub documents: HashMap<String, Vec<ClientDocument>>,
    pub deadlines: Vec<FilingDeadline>,
}

impl PortfolioRepository {
    pub fn new(seed: PortfolioSeed) -> Self {
        Self {
            clients: seed.clients,
            details: seed
                .details
                .into_iter()
                .map(|details| (details.id.clone(), details))
                .collect(),
            compliance: RwLock::new(seed.compliance),
            documents: seed.documents,
            deadlines: seed.deadlines,
        }
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn clients(&self) -> Vec<ClientSummary> {
        self.clients.clone()
    }

    async fn details(&self, client_id: &str) -> Option<ClientDetails> {
        self.details.get(client_id).cloned()
    }

    async fn compliance_items(&self, client_id: &str) -> Vec<ComplianceItem> {
        self.compliance
            .read()
            .await
            .get(client_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn update_item_status(
        &self,
        client_id: &str,
        item_id: &str,
        status: TaskStatus,
    ) -> Result<ComplianceItem, RepositoryError> {
        let mut compliance = self.compliance.write().await;
        let item = compliance
            .get_mut(client_id)
            .and_then(|items| items.iter_mut().find(|item| item.id == item_id))
            .ok_or(RepositoryError::NotFound)?;
        item.status = status;
        Ok(item.clone())
    }

    async fn documents(&self, client_id: &str) -> Vec<ClientDocument> {
        self.documents.get(client_id).cloned().unwrap_or_default()
    }

    async fn deadlines(&self) -> Vec<FilingDeadline> {
        self.deadlines.clone()
    }
}
