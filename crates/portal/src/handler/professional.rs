use crate::{
    gate::RouteFamily,
    handler::require_identity,
    middleware::{session::SessionId, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynPortfolioService, DynSessionStore},
    domain::{
        requests::UpdateStatusRequest,
        responses::{
            ApiResponse, ClientDetailsResponse, ClientDocumentsResponse, ComplianceItemResponse,
            ProfessionalDashboardResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/professional/dashboard",
    responses(
        (status = 200, description = "Client portfolio overview", body = ApiResponse<ProfessionalDashboardResponse>),
        (status = 403, description = "Not a professional account")
    ),
    security(("session_cookie" = [])),
    tag = "Professional"
)]
pub async fn get_professional_dashboard(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynPortfolioService>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Professional).await?;
    let response = service.dashboard().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/professional/clients/{client_id}",
    params(("client_id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client profile and compliance items", body = ApiResponse<ClientDetailsResponse>),
        (status = 404, description = "Client not found")
    ),
    security(("session_cookie" = [])),
    tag = "Professional"
)]
pub async fn get_client(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynPortfolioService>,
    Extension(session): Extension<SessionId>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Professional).await?;
    let response = service.client_details(&client_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/professional/clients/{client_id}/compliance/{item_id}/status",
    params(
        ("client_id" = String, Path, description = "Client ID"),
        ("item_id" = String, Path, description = "Compliance item ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ComplianceItemResponse>),
        (status = 404, description = "Item not found")
    ),
    security(("session_cookie" = [])),
    tag = "Professional"
)]
pub async fn update_client_compliance_status(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynPortfolioService>,
    Extension(session): Extension<SessionId>,
    Path((client_id, item_id)): Path<(String, String)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Professional).await?;
    let response = service
        .update_item_status(&client_id, &item_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/professional/clients/{client_id}/documents",
    params(("client_id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Documents shared by the client", body = ApiResponse<ClientDocumentsResponse>),
        (status = 404, description = "Client not found")
    ),
    security(("session_cookie" = [])),
    tag = "Professional"
)]
pub async fn get_client_documents(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynPortfolioService>,
    Extension(session): Extension<SessionId>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_identity(&store, &session, RouteFamily::Professional).await?;
    let response = service.client_documents(&client_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn professional_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/professional/dashboard",
            get(get_professional_dashboard),
        )
        .route("/api/professional/clients/{client_id}", get(get_client))
        .route(
            "/api/professional/clients/{client_id}/compliance/{item_id}/status",
            patch(update_client_compliance_status),
        )
        .route(
            "/api/professional/clients/{client_id}/documents",
            get(get_client_documents),
        )
        .layer(Extension(app_state.di_container.portfolio_service.clone()))
        .with_state(app_state)
}
