use crate::{
    errors::RepositoryError,
    model::{Identity, SessionRecord},
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub type DynSessionRepository = Arc<dyn SessionRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SessionRepositoryTrait {
    /// Opens a fresh anonymous session that stays loading for `resolve_window`.
    async fn open(&self, resolve_window: Duration) -> SessionRecord;
    async fn find(&self, session_id: &str) -> Option<SessionRecord>;
    async fn set_identity(
        &self,
        session_id: &str,
        identity: Option<Identity>,
    ) -> Result<(), RepositoryError>;
    async fn begin_mutation(&self, session_id: &str) -> Result<(), RepositoryError>;
    async fn end_mutation(&self, session_id: &str);
}
