use crate::{
    abstract_trait::SessionRepositoryTrait,
    errors::RepositoryError,
    model::{Identity, SessionRecord},
};
use async_trait::async_trait;
use std::{collections::HashMap, time::Duration};
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;
use uuid::Uuid;

pub struct SessionRepository {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    ttl: Duration,
}

impl SessionRepository {
    /// Records live for `ttl` after they are opened.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    async fn open(&self, resolve_window: Duration) -> SessionRecord {
        let now = Instant::now();
        let id = Uuid::new_v4().to_string();
        let record = SessionRecord::new(id.clone(), now + resolve_window, now + self.ttl);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, existing| !existing.is_expired(now));
        if sessions.len() < before {
            debug!("Evicted {} expired sessions", before - sessions.len());
        }

        sessions.insert(id.clone(), record.clone());
        debug!("Opened session {id}");

        record
    }

    async fn find(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .filter(|record| !record.is_expired(Instant::now()))
            .cloned()
    }

    async fn set_identity(
        &self,
        session_id: &str,
        identity: Option<Identity>,
    ) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(session_id)
            .ok_or_else(|| RepositoryError::SessionNotFound(session_id.to_string()))?;
        record.identity = identity;
        Ok(())
    }

    async fn begin_mutation(&self, session_id: &str) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get_mut(session_id)
            .ok_or_else(|| RepositoryError::SessionNotFound(session_id.to_string()))?;
        record.pending_mutations += 1;
        Ok(())
    }

    async fn end_mutation(&self, session_id: &str) {
        if let Some(record) = self.sessions.write().await.get_mut(session_id) {
            record.pending_mutations = record.pending_mutations.saturating_sub(1);
        }
    }
}
