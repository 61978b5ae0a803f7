use crate::{
    abstract_trait::{DocumentServiceTrait, DynDocumentRepository},
    domain::{
        requests::{FindDocuments, UploadDocumentRequest},
        responses::{ApiResponse, DocumentListResponse, DocumentResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{DOCUMENT_CATEGORIES, DocumentFilter, Identity, NewDocument},
    utils::{Metrics, MockLatency, Operation},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::info;

pub struct DocumentService {
    repository: DynDocumentRepository,
    latency: MockLatency,
    metrics: Metrics,
}

impl DocumentService {
    pub fn new(repository: DynDocumentRepository, latency: MockLatency, metrics: Metrics) -> Self {
        Self {
            repository,
            latency,
            metrics,
        }
    }

    async fn store(
        &self,
        identity: &Identity,
        request: &UploadDocumentRequest,
    ) -> Result<DocumentResponse, ServiceError> {
        if !DOCUMENT_CATEGORIES.contains(&request.category.as_str()) {
            return Err(ServiceError::Validation(vec![format!(
                "Unknown document category: {}",
                request.category
            )]));
        }

        self.latency.simulate("upload document").await?;

        let document = self
            .repository
            .insert(NewDocument {
                name: request.name.trim().to_string(),
                file_name: request.file_name.clone(),
                size: request.size,
                category: request.category.clone(),
                uploaded_by: identity.email.clone(),
                user_id: identity.id.clone(),
            })
            .await;

        Ok(DocumentResponse::from(document))
    }

    async fn remove(&self, user_id: &str, id: &str) -> Result<DocumentResponse, ServiceError> {
        self.latency.simulate("delete document").await?;
        let document = self.repository.delete(user_id, id).await?;
        Ok(DocumentResponse::from(document))
    }
}

#[async_trait]
impl DocumentServiceTrait for DocumentService {
    async fn find_all(
        &self,
        user_id: &str,
        request: &FindDocuments,
    ) -> Result<ApiResponse<DocumentListResponse>, ServiceError> {
        info!(
            "📂 Listing documents for {user_id} | search: {:?} | category: {:?}",
            request.search, request.category
        );

        let filter = DocumentFilter {
            search: request.search.clone(),
            category: request.category.clone(),
        };

        let documents = self
            .repository
            .list(user_id, &filter)
            .await
            .into_iter()
            .map(DocumentResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Documents retrieved successfully",
            DocumentListResponse {
                documents,
                categories: DOCUMENT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            },
        ))
    }

    async fn find_by_id(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError> {
        let document = self
            .repository
            .find(user_id, id)
            .await
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Document retrieved successfully",
            DocumentResponse::from(document),
        ))
    }

    async fn upload(
        &self,
        identity: &Identity,
        request: &UploadDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError> {
        info!("📤 Uploading {} for {}", request.file_name, identity.id);
        let started = Instant::now();

        let result = self.store(identity, request).await;
        self.metrics
            .observe(Operation::UploadDocument, started, &result);

        Ok(ApiResponse::success(
            "Document uploaded successfully",
            result?,
        ))
    }

    async fn delete(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError> {
        info!("🗑️ Deleting document {id} for {user_id}");
        let started = Instant::now();

        let result = self.remove(user_id, id).await;
        self.metrics
            .observe(Operation::DeleteDocument, started, &result);

        Ok(ApiResponse::success("Document deleted successfully", result?))
    }
}
