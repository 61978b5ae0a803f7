use crate::{
    middleware::{session::SessionId, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynSessionStore,
    domain::{
        requests::{SignInRequest, SignUpRequest},
        responses::{ApiResponse, SessionResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Compliance portal is up";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn sign_in_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    SimpleValidatedJson(body): SimpleValidatedJson<SignInRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = store.sign_in(&session_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<SessionResponse>),
        (status = 400, description = "Invalid sign-up details"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn sign_up_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    SimpleValidatedJson(body): SimpleValidatedJson<SignUpRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = store.sign_up(&session_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<SessionResponse>)
    ),
    tag = "Auth"
)]
pub async fn sign_out_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, HttpError> {
    let response = store.sign_out(&session_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<SessionResponse>)
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Auth",
)]
pub async fn get_me_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = store.snapshot(&session_id).await;
    let response = ApiResponse::success(
        "Session retrieved successfully",
        SessionResponse::from(snapshot),
    );
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/sign-in", post(sign_in_handler))
        .route("/api/auth/sign-up", post(sign_up_handler))
        .route("/api/auth/sign-out", post(sign_out_handler))
        .route("/api/auth/me", get(get_me_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .with_state(app_state)
}
