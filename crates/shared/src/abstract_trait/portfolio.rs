use crate::{
    errors::RepositoryError,
    model::{
        ClientDetails, ClientDocument, ClientSummary, ComplianceItem, FilingDeadline, TaskStatus,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPortfolioRepository = Arc<dyn PortfolioRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PortfolioRepositoryTrait {
    async fn clients(&self) -> Vec<ClientSummary>;
    async fn details(&self, client_id: &str) -> Option<ClientDetails>;
    async fn compliance_items(&self, client_id: &str) -> Vec<ComplianceItem>;
    async fn update_item_status(
        &self,
        client_id: &str,
        item_id: &str,
        status: TaskStatus,
    ) -> Result<ComplianceItem, RepositoryError>;
    async fn documents(&self, client_id: &str) -> Vec<ClientDocument>;
    async fn deadlines(&self) -> Vec<FilingDeadline>;
}
