use crate::{
    gate::{GateDecision, GateInput, RouteRequirement, evaluate},
    middleware::session::SessionId,
};
use axum::{
    Extension, Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::{
    abstract_trait::DynSessionStore,
    domain::responses::LoadingView,
    utils::{GateOutcome, Metrics},
};
use tracing::debug;

/// Evaluates the route gate for a protected page. Rendered pages find the
/// session snapshot the decision was made on in their extensions.
pub async fn route_gate(
    State(requirement): State<RouteRequirement>,
    Extension(store): Extension<DynSessionStore>,
    Extension(metrics): Extension<Metrics>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = store.snapshot(&session_id).await;
    let path = req.uri().path().to_string();

    let decision = evaluate(GateInput {
        loading: snapshot.loading,
        role: snapshot.role(),
        onboarding_complete: snapshot.onboarding_complete,
        requirement,
        path: &path,
    });

    debug!("Route gate on {path}: {decision:?}");

    match decision {
        GateDecision::Loading => {
            metrics.record_gate(GateOutcome::Loading);
            (StatusCode::ACCEPTED, Json(LoadingView::default())).into_response()
        }
        GateDecision::Redirect(to) => {
            metrics.record_gate(GateOutcome::Redirect);
            Redirect::to(to).into_response()
        }
        GateDecision::Render => {
            metrics.record_gate(GateOutcome::Render);
            req.extensions_mut().insert(snapshot);
            next.run(req).await
        }
    }
}
