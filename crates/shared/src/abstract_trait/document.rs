use crate::{
    errors::RepositoryError,
    model::{Document, DocumentFilter, NewDocument},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDocumentRepository = Arc<dyn DocumentRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DocumentRepositoryTrait {
    async fn list(&self, user_id: &str, filter: &DocumentFilter) -> Vec<Document>;
    async fn find(&self, user_id: &str, id: &str) -> Option<Document>;
    async fn insert(&self, input: NewDocument) -> Document;
    async fn delete(&self, user_id: &str, id: &str) -> Result<Document, RepositoryError>;
}
