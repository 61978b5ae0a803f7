use crate::{
    abstract_trait::DocumentRepositoryTrait,
    errors::RepositoryError,
    model::{Document, DocumentFilter, NewDocument, file_extension},
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Default)]
pub struct DocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl DocumentRepository {
    pub fn new(seed: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl DocumentRepositoryTrait for DocumentRepository {
    async fn list(&self, user_id: &str, filter: &DocumentFilter) -> Vec<Document> {
        self.documents
            .read()
            .await
            .iter()
            .filter(|doc| doc.user_id == user_id && filter.matches(doc))
            .cloned()
            .collect()
    }

    async fn find(&self, user_id: &str, id: &str) -> Option<Document> {
        self.documents
            .read()
            .await
            .iter()
            .find(|doc| doc.user_id == user_id && doc.id == id)
            .cloned()
    }

    async fn insert(&self, input: NewDocument) -> Document {
        let id = Uuid::new_v4().to_string();
        let document = Document {
            url: format!("/documents/{id}"),
            file_type: file_extension(&input.file_name),
            id,
            name: input.name,
            size: input.size,
            uploaded_at: Utc::now(),
            uploaded_by: input.uploaded_by,
            category: input.category,
            user_id: input.user_id,
        };

        info!("Stored document {} for {}", document.id, document.user_id);
        self.documents.write().await.push(document.clone());
        document
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<Document, RepositoryError> {
        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| doc.user_id == user_id && doc.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(documents.remove(index))
    }
}
