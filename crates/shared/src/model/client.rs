use crate::model::compliance::TaskStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone)]
pub struct ClientSummary {
    pub id: String,
    pub business_name: String,
    pub pending_compliance: u32,
    pub total_compliance: u32,
    pub risk_level: RiskLevel,
    pub last_activity: String,
}

#[derive(Debug, Clone)]
pub struct ClientDetails {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub registration_date: String,
    pub contact_person: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub due_date: String,
    pub status: TaskStatus,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ClientDocument {
    pub id: String,
    pub name: String,
    pub file_type: String,
    pub category: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    NotStarted,
    Pending,
    InProgress,
}

#[derive(Debug, Clone)]
pub struct FilingDeadline {
    pub id: String,
    pub client_name: String,
    pub filing_type: String,
    pub due_date: String,
    pub status: FilingStatus,
}
