use crate::model::{
    ClientDetails, ClientDocument, ClientSummary, ComplianceItem, FilingDeadline, FilingStatus,
    RiskLevel, TaskStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientSummaryResponse {
    pub id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "pendingCompliance")]
    pub pending_compliance: u32,
    #[serde(rename = "totalCompliance")]
    pub total_compliance: u32,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "lastActivity")]
    pub last_activity: String,
}

impl From<ClientSummary> for ClientSummaryResponse {
    fn from(value: ClientSummary) -> Self {
        Self {
            id: value.id,
            business_name: value.business_name,
            pending_compliance: value.pending_compliance,
            total_compliance: value.total_compliance,
            risk_level: value.risk_level,
            last_activity: value.last_activity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FilingDeadlineResponse {
    pub id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "filingType")]
    pub filing_type: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub status: FilingStatus,
}

impl From<FilingDeadline> for FilingDeadlineResponse {
    fn from(value: FilingDeadline) -> Self {
        Self {
            id: value.id,
            client_name: value.client_name,
            filing_type: value.filing_type,
            due_date: value.due_date,
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProfessionalDashboardResponse {
    pub clients: Vec<ClientSummaryResponse>,
    #[serde(rename = "totalClients")]
    pub total_clients: usize,
    #[serde(rename = "pendingComplianceTasks")]
    pub pending_compliance_tasks: u32,
    #[serde(rename = "highRiskClients")]
    pub high_risk_clients: usize,
    pub deadlines: Vec<FilingDeadlineResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ComplianceItemResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub status: TaskStatus,
    pub category: String,
    pub description: String,
}

impl From<ComplianceItem> for ComplianceItemResponse {
    fn from(value: ComplianceItem) -> Self {
        Self {
            id: value.id,
            title: value.title,
            due_date: value.due_date,
            status: value.status,
            category: value.category,
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    #[serde(rename = "registrationDate")]
    pub registration_date: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    pub description: String,
}

impl From<ClientDetails> for ClientProfileResponse {
    fn from(value: ClientDetails) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            industry: value.industry,
            registration_date: value.registration_date,
            contact_person: value.contact_person,
            description: value.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientDetailsResponse {
    pub client: ClientProfileResponse,
    pub compliance: Vec<ComplianceItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientDocumentResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub category: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
}

impl From<ClientDocument> for ClientDocumentResponse {
    fn from(value: ClientDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            file_type: value.file_type,
            category: value.category,
            uploaded_at: value.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientDocumentsResponse {
    pub client: ClientSummaryResponse,
    pub documents: Vec<ClientDocumentResponse>,
}
