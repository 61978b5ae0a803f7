use crate::model::{Document, format_file_size};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DocumentResponse {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: u64,
    #[serde(rename = "fileSize")]
    pub file_size: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    pub category: String,
}

impl From<Document> for DocumentResponse {
    fn from(value: Document) -> Self {
        Self {
            file_size: format_file_size(value.size),
            uploaded_at: value.uploaded_at.to_rfc3339(),
            id: value.id,
            name: value.name,
            url: value.url,
            file_type: value.file_type,
            size: value.size,
            uploaded_by: value.uploaded_by,
            category: value.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentResponse>,
    pub categories: Vec<String>,
}
