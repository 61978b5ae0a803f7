use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body a page navigation answers with.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PageView<T> {
    pub page: String,
    pub title: String,
    pub data: T,
}

impl<T> PageView<T> {
    pub fn new(page: &str, title: &str, data: T) -> Self {
        Self {
            page: page.to_string(),
            title: title.to_string(),
            data,
        }
    }
}

/// Neutral placeholder shown while a session's identity is resolving.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoadingView {
    pub loading: bool,
}

impl Default for LoadingView {
    fn default() -> Self {
        Self { loading: true }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StaticContent {
    pub heading: String,
    pub sections: Vec<String>,
}

impl StaticContent {
    pub fn new(heading: &str, sections: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }
}
