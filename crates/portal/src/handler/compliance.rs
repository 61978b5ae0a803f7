use crate::{
    gate::RouteFamily,
    handler::require_identity,
    middleware::{session::SessionId, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynComplianceService, DynSessionStore},
    domain::{
        requests::{FindCompliances, UpdateStatusRequest},
        responses::{
            ApiResponse, ClientDashboardResponse, ComplianceListResponse, ComplianceTaskResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/compliances",
    params(FindCompliances),
    responses(
        (status = 200, description = "Compliance tasks for the selected tab", body = ApiResponse<ComplianceListResponse>),
        (status = 400, description = "Unknown status tab")
    ),
    security(("session_cookie" = [])),
    tag = "Compliance"
)]
pub async fn get_compliances(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynComplianceService>,
    Extension(session): Extension<SessionId>,
    Query(params): Query<FindCompliances>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/compliances/{id}/status",
    params(("id" = String, Path, description = "Compliance task ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ComplianceTaskResponse>),
        (status = 404, description = "Task not found")
    ),
    security(("session_cookie" = [])),
    tag = "Compliance"
)]
pub async fn update_compliance_status(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynComplianceService>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.update_status(&id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Client dashboard", body = ApiResponse<ClientDashboardResponse>),
        (status = 401, description = "Not signed in")
    ),
    security(("session_cookie" = [])),
    tag = "Compliance"
)]
pub async fn get_client_dashboard(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynComplianceService>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, HttpError> {
    let identity = require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.dashboard(&identity.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn compliance_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/compliances", get(get_compliances))
        .route(
            "/api/compliances/{id}/status",
            patch(update_compliance_status),
        )
        .route("/api/dashboard", get(get_client_dashboard))
        .layer(Extension(app_state.di_container.compliance_service.clone()))
        .with_state(app_state)
}
