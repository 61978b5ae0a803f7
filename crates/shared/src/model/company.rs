use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct CompanyInfo {
    pub id: String,
    pub name: String,
    pub registration_status: RegistrationStatus,
    pub industry: String,
    pub registration_date: Option<String>,
}
