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
    routing::get,
};
use shared::{
    abstract_trait::{DynDocumentService, DynSessionStore},
    domain::{
        requests::{FindDocuments, UploadDocumentRequest},
        responses::{ApiResponse, DocumentListResponse, DocumentResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/documents",
    params(FindDocuments),
    responses(
        (status = 200, description = "Documents of the signed-in user", body = ApiResponse<DocumentListResponse>),
        (status = 401, description = "Not signed in")
    ),
    security(("session_cookie" = [])),
    tag = "Document"
)]
pub async fn get_documents(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynDocumentService>,
    Extension(session): Extension<SessionId>,
    Query(params): Query<FindDocuments>,
) -> Result<impl IntoResponse, HttpError> {
    let identity = require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.find_all(&identity.id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document details", body = ApiResponse<DocumentResponse>),
        (status = 404, description = "Document not found")
    ),
    security(("session_cookie" = [])),
    tag = "Document"
)]
pub async fn get_document(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynDocumentService>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let identity = require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.find_by_id(&identity.id, &id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = UploadDocumentRequest,
    responses(
        (status = 201, description = "Document uploaded", body = ApiResponse<DocumentResponse>),
        (status = 400, description = "Invalid upload")
    ),
    security(("session_cookie" = [])),
    tag = "Document"
)]
pub async fn upload_document(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynDocumentService>,
    Extension(session): Extension<SessionId>,
    SimpleValidatedJson(body): SimpleValidatedJson<UploadDocumentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let identity = require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.upload(&identity, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document deleted", body = ApiResponse<DocumentResponse>),
        (status = 404, description = "Document not found")
    ),
    security(("session_cookie" = [])),
    tag = "Document"
)]
pub async fn delete_document(
    Extension(store): Extension<DynSessionStore>,
    Extension(service): Extension<DynDocumentService>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let identity = require_identity(&store, &session, RouteFamily::Client).await?;
    let response = service.delete(&identity.id, &id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn document_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/documents", get(get_documents).post(upload_document))
        .route("/api/documents/{id}", get(get_document).delete(delete_document))
        .layer(Extension(app_state.di_container.document_service.clone()))
        .with_state(app_state)
}
