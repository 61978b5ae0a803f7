mod api;
mod compliance;
mod document;
mod onboarding;
mod page;
mod portfolio;
mod session;

pub use self::api::ApiResponse;
pub use self::compliance::{
    ClientDashboardResponse, CompanyInfoResponse, ComplianceHealthResponse,
    ComplianceListResponse, ComplianceTaskResponse, StatusCounts,
};
pub use self::document::{DocumentListResponse, DocumentResponse};
pub use self::onboarding::{OnboardingOptionResponse, onboarding_options};
pub use self::page::{LoadingView, PageView, StaticContent};
pub use self::portfolio::{
    ClientDetailsResponse, ClientDocumentResponse, ClientDocumentsResponse,
    ClientProfileResponse, ClientSummaryResponse, ComplianceItemResponse,
    FilingDeadlineResponse, ProfessionalDashboardResponse,
};
pub use self::session::{IdentityResponse, SessionResponse};
