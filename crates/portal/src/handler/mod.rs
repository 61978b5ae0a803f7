mod auth;
mod compliance;
mod document;
mod onboarding;
mod page;
mod professional;

use crate::{
    gate::RouteFamily,
    middleware::session::{SessionId, session_middleware},
    state::AppState,
};
use anyhow::Result;
use axum::{
    Extension, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    abstract_trait::DynSessionStore,
    errors::{HttpError, ServiceError},
    model::Identity,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::compliance::compliance_routes;
pub use self::document::document_routes;
pub use self::onboarding::onboarding_routes;
pub use self::page::{not_found_handler, page_routes};
pub use self::professional::professional_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::sign_in_handler,
        auth::sign_up_handler,
        auth::sign_out_handler,
        auth::get_me_handler,

        onboarding::get_onboarding_options,
        onboarding::complete_onboarding_handler,
        onboarding::complete_professional_onboarding_handler,

        document::get_documents,
        document::get_document,
        document::upload_document,
        document::delete_document,

        compliance::get_compliances,
        compliance::update_compliance_status,
        compliance::get_client_dashboard,

        professional::get_professional_dashboard,
        professional::get_client,
        professional::update_client_compliance_status,
        professional::get_client_documents,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Session and sign-in endpoints"),
        (name = "Onboarding", description = "Role-specific onboarding endpoints"),
        (name = "Document", description = "Document management endpoints"),
        (name = "Compliance", description = "Compliance task endpoints"),
        (name = "Professional", description = "Professional client portfolio endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}

/// Identity behind an API call, limited to the roles the family admits.
pub(crate) async fn require_identity(
    store: &DynSessionStore,
    session: &SessionId,
    family: RouteFamily,
) -> Result<Identity, HttpError> {
    let identity = store
        .snapshot(&session.0)
        .await
        .identity
        .ok_or(ServiceError::Unauthenticated)?;

    if !family.admits(identity.role) {
        return Err(HttpError::Forbidden(
            "This area is reserved for professionals".to_string(),
        ));
    }

    Ok(identity)
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(shared_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(onboarding_routes(shared_state.clone()))
            .merge(document_routes(shared_state.clone()))
            .merge(compliance_routes(shared_state.clone()))
            .merge(professional_routes(shared_state.clone()))
            .merge(page_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        let app_router = app_router
            .fallback(not_found_handler)
            .layer(middleware::from_fn(session_middleware))
            .layer(Extension(shared_state.di_container.session_store.clone()))
            .layer(Extension(shared_state.jwt_config.clone()))
            .layer(Extension(shared_state.metrics.clone()))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
