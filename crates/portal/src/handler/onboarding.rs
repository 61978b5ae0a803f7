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
        requests::{OnboardingRequest, ProfessionalOnboardingRequest},
        responses::{ApiResponse, OnboardingOptionResponse, SessionResponse, onboarding_options},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/onboarding/options",
    responses(
        (status = 200, description = "Business structures to choose from", body = ApiResponse<Vec<OnboardingOptionResponse>>)
    ),
    tag = "Onboarding"
)]
pub async fn get_onboarding_options() -> Result<impl IntoResponse, HttpError> {
    let response = ApiResponse::success(
        "Onboarding options retrieved successfully",
        onboarding_options(),
    );
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/onboarding",
    request_body = OnboardingRequest,
    responses(
        (status = 200, description = "Onboarding completed", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Not a client account")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Onboarding"
)]
pub async fn complete_onboarding_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    SimpleValidatedJson(body): SimpleValidatedJson<OnboardingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = store.complete_onboarding(&session_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/professional/onboarding",
    request_body = ProfessionalOnboardingRequest,
    responses(
        (status = 200, description = "Professional profile completed", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Not a professional account")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Onboarding"
)]
pub async fn complete_professional_onboarding_handler(
    Extension(store): Extension<DynSessionStore>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProfessionalOnboardingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = store
        .complete_professional_onboarding(&session_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn onboarding_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/onboarding/options", get(get_onboarding_options))
        .route("/api/onboarding", post(complete_onboarding_handler))
        .route(
            "/api/professional/onboarding",
            post(complete_professional_onboarding_handler),
        )
        .with_state(app_state)
}
