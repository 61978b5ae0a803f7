use crate::{
    gate::{RouteRequirement, landing_path},
    middleware::{gate::route_gate, session::SessionId},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::{
    abstract_trait::{
        DynComplianceService, DynDocumentService, DynPortfolioService, DynSessionStore,
    },
    domain::{
        requests::{FindCompliances, FindDocuments},
        responses::{
            ApiResponse, LoadingView, OnboardingOptionResponse, PageView, SessionResponse,
            StaticContent, onboarding_options,
        },
    },
    errors::{HttpError, RepositoryError, ServiceError},
    model::{DOCUMENT_CATEGORIES, Identity, ProfessionalType, Role, SessionSnapshot},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize)]
pub struct AuthPageQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthPage {
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ClientOnboardingPage {
    pub options: Vec<OnboardingOptionResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProfessionalOnboardingPage {
    #[serde(rename = "professionalType")]
    pub professional_type: Option<ProfessionalType>,
}

#[derive(Debug, Serialize)]
pub struct UploadPage {
    pub categories: Vec<String>,
}

fn view<T: Serialize>(page: &str, title: &str, data: T) -> Response {
    (StatusCode::OK, Json(PageView::new(page, title, data))).into_response()
}

fn static_page(page: &str, title: &str, sections: &[&str]) -> Response {
    view(page, title, StaticContent::new(title, sections))
}

pub fn not_found_view() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(PageView::new(
            "not-found",
            "Page not found",
            StaticContent::new(
                "404",
                &["The page you are looking for does not exist or has been moved."],
            ),
        )),
    )
        .into_response()
}

/// Renders service data as a page; a missing entity degrades to the
/// not-found view.
fn render<T: Serialize>(
    page: &str,
    title: &str,
    result: Result<ApiResponse<T>, ServiceError>,
) -> Result<Response, HttpError> {
    match result {
        Ok(response) => Ok(view(page, title, response.data)),
        Err(ServiceError::Repo(RepositoryError::NotFound)) => Ok(not_found_view()),
        Err(err) => Err(err.into()),
    }
}

fn identity_of(snapshot: SessionSnapshot) -> Result<Identity, HttpError> {
    snapshot
        .identity
        .ok_or_else(|| HttpError::from(ServiceError::Unauthenticated))
}

pub async fn home_page(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Response {
    let snapshot = store.snapshot(&session_id).await;

    if let Some(role) = snapshot.role().filter(|_| !snapshot.loading) {
        return Redirect::to(landing_path(role, snapshot.onboarding_complete)).into_response();
    }

    view("home", "Compliance made simple", SessionResponse::from(snapshot))
}

pub async fn auth_page(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Query(query): Query<AuthPageQuery>,
) -> Response {
    let snapshot = store.snapshot(&session_id).await;

    if snapshot.loading {
        return (StatusCode::ACCEPTED, Json(LoadingView::default())).into_response();
    }

    if let Some(role) = snapshot.role() {
        return Redirect::to(landing_path(role, snapshot.onboarding_complete)).into_response();
    }

    let role = query
        .role
        .and_then(|role| role.parse::<Role>().ok())
        .unwrap_or(Role::Client);

    view("auth", "Sign in", AuthPage { role })
}

pub async fn get_started_page() -> Response {
    static_page(
        "get-started",
        "Get started",
        &[
            "Create your account as a business owner or as a CA/CS professional.",
            "Pick a business structure and we will guide you through registration.",
        ],
    )
}

pub async fn about_page() -> Response {
    static_page(
        "about",
        "About us",
        &["We help founders stay on top of registrations, filings and renewals."],
    )
}

pub async fn mission_page() -> Response {
    static_page(
        "mission",
        "Our mission",
        &["Make regulatory compliance predictable for every small business."],
    )
}

pub async fn contact_page() -> Response {
    static_page(
        "contact",
        "Contact",
        &["Write to support@example.com and we will get back within one business day."],
    )
}

pub async fn terms_page() -> Response {
    static_page(
        "terms",
        "Terms of service",
        &["By using the portal you agree to provide accurate business information."],
    )
}

pub async fn privacy_page() -> Response {
    static_page(
        "privacy",
        "Privacy policy",
        &["Documents you upload are visible only to you and the professionals you engage."],
    )
}

pub async fn onboarding_page(Extension(snapshot): Extension<SessionSnapshot>) -> Response {
    let settled = |role: &Role| *role != Role::Client || snapshot.onboarding_complete;
    if let Some(role) = snapshot.role().filter(settled) {
        return Redirect::to(landing_path(role, snapshot.onboarding_complete)).into_response();
    }

    view(
        "onboarding",
        "Choose your business structure",
        ClientOnboardingPage {
            options: onboarding_options(),
        },
    )
}

pub async fn dashboard_page(
    Extension(snapshot): Extension<SessionSnapshot>,
    Extension(service): Extension<DynComplianceService>,
) -> Result<Response, HttpError> {
    let identity = identity_of(snapshot)?;
    render("dashboard", "Dashboard", service.dashboard(&identity.id).await)
}

pub async fn documents_page(
    Extension(snapshot): Extension<SessionSnapshot>,
    Extension(service): Extension<DynDocumentService>,
    Query(params): Query<FindDocuments>,
) -> Result<Response, HttpError> {
    let identity = identity_of(snapshot)?;
    render(
        "documents",
        "Documents",
        service.find_all(&identity.id, &params).await,
    )
}

pub async fn upload_page() -> Response {
    view(
        "documents-upload",
        "Upload document",
        UploadPage {
            categories: DOCUMENT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        },
    )
}

pub async fn document_page(
    Extension(snapshot): Extension<SessionSnapshot>,
    Extension(service): Extension<DynDocumentService>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let identity = identity_of(snapshot)?;
    render(
        "document",
        "Document",
        service.find_by_id(&identity.id, &id).await,
    )
}

pub async fn compliances_page(
    Extension(service): Extension<DynComplianceService>,
    Query(params): Query<FindCompliances>,
) -> Result<Response, HttpError> {
    render("compliances", "Compliances", service.find_all(&params).await)
}

pub async fn professional_onboarding_page(
    Extension(snapshot): Extension<SessionSnapshot>,
) -> Response {
    view(
        "professional-onboarding",
        "Complete your professional profile",
        ProfessionalOnboardingPage {
            professional_type: snapshot.professional_type,
        },
    )
}

pub async fn professional_dashboard_page(
    Extension(service): Extension<DynPortfolioService>,
) -> Result<Response, HttpError> {
    render(
        "professional-dashboard",
        "Professional dashboard",
        service.dashboard().await,
    )
}

pub async fn client_page(
    Extension(service): Extension<DynPortfolioService>,
    Path(client_id): Path<String>,
) -> Result<Response, HttpError> {
    render(
        "professional-client",
        "Client details",
        service.client_details(&client_id).await,
    )
}

pub async fn client_documents_page(
    Extension(service): Extension<DynPortfolioService>,
    Path(client_id): Path<String>,
) -> Result<Response, HttpError> {
    render(
        "professional-client-documents",
        "Client documents",
        service.client_documents(&client_id).await,
    )
}

pub async fn not_found_handler() -> Response {
    not_found_view()
}

pub fn page_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_pages = OpenApiRouter::new()
        .route("/", get(home_page))
        .route("/auth", get(auth_page))
        .route("/get-started", get(get_started_page))
        .route("/about", get(about_page))
        .route("/mission", get(mission_page))
        .route("/contact", get(contact_page))
        .route("/terms", get(terms_page))
        .route("/privacy", get(privacy_page));

    let client_setup = OpenApiRouter::new()
        .route("/onboarding", get(onboarding_page))
        .route_layer(middleware::from_fn_with_state(
            RouteRequirement::CLIENT_SIGNED_IN,
            route_gate,
        ));

    let client_pages = OpenApiRouter::new()
        .route("/dashboard", get(dashboard_page))
        .route("/documents", get(documents_page))
        .route("/documents/upload", get(upload_page))
        .route("/documents/{id}", get(document_page))
        .route("/compliances", get(compliances_page))
        .route_layer(middleware::from_fn_with_state(
            RouteRequirement::CLIENT_ONBOARDED,
            route_gate,
        ));

    let professional_setup = OpenApiRouter::new()
        .route(
            "/professional/onboarding",
            get(professional_onboarding_page),
        )
        .route_layer(middleware::from_fn_with_state(
            RouteRequirement::PROFESSIONAL_SIGNED_IN,
            route_gate,
        ));

    let professional_pages = OpenApiRouter::new()
        .route(
            "/professional/dashboard",
            get(professional_dashboard_page),
        )
        .route("/professional/clients/{client_id}", get(client_page))
        .route(
            "/professional/clients/{client_id}/documents",
            get(client_documents_page),
        )
        .route_layer(middleware::from_fn_with_state(
            RouteRequirement::PROFESSIONAL_ONBOARDED,
            route_gate,
        ));

    public_pages
        .merge(client_setup)
        .merge(client_pages)
        .merge(professional_setup)
        .merge(professional_pages)
        .layer(Extension(app_state.di_container.document_service.clone()))
        .layer(Extension(app_state.di_container.compliance_service.clone()))
        .layer(Extension(app_state.di_container.portfolio_service.clone()))
        .with_state(app_state)
}
