use crate::model::TaskStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, IntoParams, Clone)]
pub struct FindCompliances {
    /// `all` or one of the task statuses.
    #[serde(default = "default_tab")]
    pub status: String,

    #[serde(default)]
    pub search: String,
}

impl Default for FindCompliances {
    fn default() -> Self {
        Self {
            status: default_tab(),
            search: String::new(),
        }
    }
}

fn default_tab() -> String {
    "all".to_string()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateStatusRequest {
    pub status: TaskStatus,
}
