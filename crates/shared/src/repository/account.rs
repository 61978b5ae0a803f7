use crate::{
    abstract_trait::AccountRepositoryTrait,
    errors::RepositoryError,
    model::{Account, BusinessStructure, NewAccount, ProfessionalProfile},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Mock account directory keyed by lower-cased email.
#[derive(Default)]
pub struct AccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|account| (account.email.to_lowercase(), account))
            .collect();
        Self {
            accounts: RwLock::new(map),
        }
    }

    async fn update<F>(&self, id: &str, apply: F) -> Result<Account, RepositoryError>
    where
        F: FnOnce(&mut Account),
    {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|account| account.id == id)
            .ok_or(RepositoryError::NotFound)?;
        apply(account);
        Ok(account.clone())
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .get(&email.trim().to_lowercase())
            .cloned()
    }

    async fn find_by_id(&self, id: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|account| account.id == id)
            .cloned()
    }

    async fn create(&self, input: NewAccount) -> Result<Account, RepositoryError> {
        let key = input.email.trim().to_lowercase();
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&key) {
            debug!("Rejected duplicate account for {key}");
            return Err(RepositoryError::AlreadyExists(format!(
                "An account for {key} already exists"
            )));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            email: input.email.trim().to_string(),
            password_hash: input.password_hash,
            role: input.role,
            professional_type: input.professional_type,
            onboarding_complete: input.onboarding_complete,
            business_structure: None,
            professional_profile: None,
            created_at: Utc::now(),
        };

        info!("Created {} account {}", account.role, account.id);
        accounts.insert(key, account.clone());
        Ok(account)
    }

    async fn complete_client_onboarding(
        &self,
        id: &str,
        structure: BusinessStructure,
    ) -> Result<Account, RepositoryError> {
        self.update(id, |account| {
            account.business_structure = Some(structure);
            account.onboarding_complete = true;
        })
        .await
    }

    async fn complete_professional_onboarding(
        &self,
        id: &str,
        profile: ProfessionalProfile,
    ) -> Result<Account, RepositoryError> {
        self.update(id, |account| {
            account.professional_profile = Some(profile);
            account.onboarding_complete = true;
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            email: email.into(),
            password_hash: "hash".into(),
            role: Role::Client,
            professional_type: None,
            onboarding_complete: false,
        }
    }

    #[tokio::test]
    async fn emails_are_unique_regardless_of_case() {
        let repo = AccountRepository::new();
        repo.create(new_account("Owner@Acme.com")).await.unwrap();

        let err = repo.create(new_account("owner@acme.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
        assert!(repo.find_by_email("OWNER@acme.com").await.is_some());
    }

    #[tokio::test]
    async fn client_onboarding_records_structure() {
        let repo = AccountRepository::new();
        let account = repo.create(new_account("a@b.co")).await.unwrap();

        let updated = repo
            .complete_client_onboarding(&account.id, BusinessStructure::Llp)
            .await
            .unwrap();

        assert!(updated.onboarding_complete);
        assert_eq!(updated.business_structure, Some(BusinessStructure::Llp));
    }

    #[tokio::test]
    async fn onboarding_unknown_account_is_not_found() {
        let repo = AccountRepository::new();
        let err = repo
            .complete_client_onboarding("missing", BusinessStructure::Opc)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
