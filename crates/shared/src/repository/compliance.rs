use crate::{
    abstract_trait::ComplianceRepositoryTrait,
    errors::RepositoryError,
    model::{CompanyInfo, ComplianceTask, TaskStatus},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct ComplianceRepository {
    tasks: RwLock<Vec<ComplianceTask>>,
    company: CompanyInfo,
}

impl ComplianceRepository {
    pub fn new(tasks: Vec<ComplianceTask>, company: CompanyInfo) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            company,
        }
    }
}

#[async_trait]
impl ComplianceRepositoryTrait for ComplianceRepository {
    async fn list(&self) -> Vec<ComplianceTask> {
        self.tasks.read().await.clone()
    }

    async fn update_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<ComplianceTask, RepositoryError> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepositoryError::NotFound)?;
        task.status = status;
        Ok(task.clone())
    }

    async fn company(&self) -> CompanyInfo {
        self.company.clone()
    }
}
