use crate::{
    domain::responses::document::DocumentResponse,
    model::{
        CompanyInfo, ComplianceHealth, ComplianceTask, RegistrationStatus, TaskPriority,
        TaskStatus,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ComplianceTaskResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub category: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(rename = "regulatoryReference")]
    pub regulatory_reference: Option<String>,
}

impl From<ComplianceTask> for ComplianceTaskResponse {
    fn from(value: ComplianceTask) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            due_date: value.due_date,
            category: value.category,
            priority: value.priority,
            status: value.status,
            regulatory_reference: value.regulatory_reference,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    #[serde(rename = "in-progress")]
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl StatusCounts {
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TaskStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            counts.all += 1;
            match status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Overdue => counts.overdue += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ComplianceListResponse {
    pub tasks: Vec<ComplianceTaskResponse>,
    pub counts: StatusCounts,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CompanyInfoResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "registrationStatus")]
    pub registration_status: RegistrationStatus,
    pub industry: String,
    #[serde(rename = "registrationDate")]
    pub registration_date: Option<String>,
}

impl From<CompanyInfo> for CompanyInfoResponse {
    fn from(value: CompanyInfo) -> Self {
        Self {
            id: value.id,
            name: value.name,
            registration_status: value.registration_status,
            industry: value.industry,
            registration_date: value.registration_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ComplianceHealthResponse {
    pub score: u32,
    #[serde(rename = "completedCompliances")]
    pub completed: usize,
    #[serde(rename = "totalCompliances")]
    pub total: usize,
    #[serde(rename = "nextSteps")]
    pub next_steps: Vec<String>,
}

impl From<ComplianceHealth> for ComplianceHealthResponse {
    fn from(value: ComplianceHealth) -> Self {
        Self {
            score: value.score,
            completed: value.completed,
            total: value.total,
            next_steps: value.next_steps,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientDashboardResponse {
    pub company: CompanyInfoResponse,
    pub counts: StatusCounts,
    pub upcoming: Vec<ComplianceTaskResponse>,
    #[serde(rename = "recentDocuments")]
    pub recent_documents: Vec<DocumentResponse>,
    pub health: ComplianceHealthResponse,
}
