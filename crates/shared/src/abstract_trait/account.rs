use crate::{
    errors::RepositoryError,
    model::{Account, BusinessStructure, NewAccount, ProfessionalProfile},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAccountRepository = Arc<dyn AccountRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AccountRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Option<Account>;
    async fn find_by_id(&self, id: &str) -> Option<Account>;
    async fn create(&self, input: NewAccount) -> Result<Account, RepositoryError>;
    async fn complete_client_onboarding(
        &self,
        id: &str,
        structure: BusinessStructure,
    ) -> Result<Account, RepositoryError>;
    async fn complete_professional_onboarding(
        &self,
        id: &str,
        profile: ProfessionalProfile,
    ) -> Result<Account, RepositoryError>;
}
