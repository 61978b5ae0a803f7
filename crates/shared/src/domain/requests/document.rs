use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams, Clone)]
pub struct FindDocuments {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UploadDocumentRequest {
    #[validate(length(min = 1, message = "Document name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Document category is required"))]
    pub category: String,

    #[serde(rename = "fileName")]
    #[validate(length(min = 1, message = "File is required"))]
    pub file_name: String,

    #[validate(range(min = 1, message = "File is empty"))]
    pub size: u64,
}
