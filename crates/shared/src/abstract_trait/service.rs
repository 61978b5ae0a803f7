use crate::{
    domain::{
        requests::{
            FindCompliances, FindDocuments, OnboardingRequest, ProfessionalOnboardingRequest,
            SignInRequest, SignUpRequest, UpdateStatusRequest, UploadDocumentRequest,
        },
        responses::{
            ApiResponse, ClientDashboardResponse, ClientDetailsResponse, ClientDocumentsResponse,
            ComplianceItemResponse, ComplianceListResponse, ComplianceTaskResponse,
            DocumentListResponse, DocumentResponse, ProfessionalDashboardResponse,
            SessionResponse,
        },
    },
    errors::ServiceError,
    model::{Identity, SessionRecord, SessionSnapshot},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;
pub type DynDocumentService = Arc<dyn DocumentServiceTrait + Send + Sync>;
pub type DynComplianceService = Arc<dyn ComplianceServiceTrait + Send + Sync>;
pub type DynPortfolioService = Arc<dyn PortfolioServiceTrait + Send + Sync>;

/// Who is signed in on a session, as what role, and whether they finished
/// onboarding. Every mutation keeps the session loading until it settles.
#[async_trait]
pub trait SessionStoreTrait {
    async fn open_session(&self) -> SessionRecord;

    async fn find_session(&self, session_id: &str) -> Option<SessionRecord>;

    /// Unknown sessions read as anonymous and settled.
    async fn snapshot(&self, session_id: &str) -> SessionSnapshot;

    async fn sign_in(
        &self,
        session_id: &str,
        request: &SignInRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError>;

    async fn sign_up(
        &self,
        session_id: &str,
        request: &SignUpRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError>;

    async fn sign_out(&self, session_id: &str)
    -> Result<ApiResponse<SessionResponse>, ServiceError>;

    async fn complete_onboarding(
        &self,
        session_id: &str,
        request: &OnboardingRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError>;

    async fn complete_professional_onboarding(
        &self,
        session_id: &str,
        request: &ProfessionalOnboardingRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError>;
}

#[async_trait]
pub trait DocumentServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        request: &FindDocuments,
    ) -> Result<ApiResponse<DocumentListResponse>, ServiceError>;

    async fn find_by_id(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError>;

    async fn upload(
        &self,
        identity: &Identity,
        request: &UploadDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError>;

    async fn delete(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<ApiResponse<DocumentResponse>, ServiceError>;
}

#[async_trait]
pub trait ComplianceServiceTrait {
    async fn find_all(
        &self,
        request: &FindCompliances,
    ) -> Result<ApiResponse<ComplianceListResponse>, ServiceError>;

    async fn update_status(
        &self,
        id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<ApiResponse<ComplianceTaskResponse>, ServiceError>;

    async fn dashboard(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<ClientDashboardResponse>, ServiceError>;
}

#[async_trait]
pub trait PortfolioServiceTrait {
    async fn dashboard(&self) -> Result<ApiResponse<ProfessionalDashboardResponse>, ServiceError>;

    async fn client_details(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<ClientDetailsResponse>, ServiceError>;

    async fn update_item_status(
        &self,
        client_id: &str,
        item_id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<ApiResponse<ComplianceItemResponse>, ServiceError>;

    async fn client_documents(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<ClientDocumentsResponse>, ServiceError>;
}
