use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DOCUMENT_CATEGORIES: [&str; 6] = [
    "Business Plan",
    "Financial",
    "Legal",
    "Marketing",
    "Operations",
    "Other",
];

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub url: String,
    pub file_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
    pub category: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub file_name: String,
    pub size: u64,
    pub category: String,
    pub uploaded_by: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DocumentFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => document
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };

        let matches_category = match self.category.as_deref() {
            Some(category) if !category.is_empty() => document.category == category,
            _ => true,
        };

        matches_search && matches_category
    }
}

/// Lower-cased extension of a file name, `"file"` when there is none.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => "file".to_string(),
    }
}

/// Human-readable size the way the document tables print it.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * 1000;

    if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{} KB", size / KB)
    } else {
        format!("{size} B")
    }
}
