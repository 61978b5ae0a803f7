use crate::{
    errors::RepositoryError,
    model::{CompanyInfo, ComplianceTask, TaskStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynComplianceRepository = Arc<dyn ComplianceRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ComplianceRepositoryTrait {
    async fn list(&self) -> Vec<ComplianceTask>;
    async fn update_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<ComplianceTask, RepositoryError>;
    async fn company(&self) -> CompanyInfo;
}
