use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use portal::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use shared::config::Config;
use std::{collections::HashMap, sync::Arc};
use tower::ServiceExt;

async fn app_with(overrides: &[(&str, &str)]) -> Router {
    let mut env: HashMap<String, String> = [
        ("PORT", "0"),
        ("JWT_SECRET", "test-secret"),
        ("MOCK_LATENCY_MS", "0"),
        ("IDENTITY_RESOLVE_MS", "0"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        env.insert(k.to_string(), v.to_string());
    }

    let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();
    let state = AppState::new(&config).await.unwrap();
    AppRouter::build(Arc::new(state))
}

async fn app() -> Router {
    app_with(&[]).await
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Opens a session and returns the cookie that names it.
async fn open_session(app: &Router) -> String {
    let response = send(app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));

    set_cookie.split(';').next().unwrap().to_string()
}

async fn sign_in(app: &Router, email: &str) -> String {
    let cookie = open_session(app).await;
    let response = send(
        app,
        Method::POST,
        "/api/auth/sign-in",
        Some(&cookie),
        Some(json!({ "email": email, "password": "password123" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    cookie
}

#[tokio::test]
async fn anonymous_professional_visit_redirects_to_professional_sign_in() {
    let app = app().await;

    let response = send(&app, Method::GET, "/professional/dashboard", None, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth?role=professional");
}

#[tokio::test]
async fn anonymous_client_visit_redirects_to_sign_in() {
    let app = app().await;

    let response = send(&app, Method::GET, "/documents", None, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth");
}

#[tokio::test]
async fn unfinished_professional_is_sent_to_onboarding() {
    let app = app().await;
    let cookie = sign_in(&app, "ca@example.com").await;

    let dashboard = send(&app, Method::GET, "/professional/dashboard", Some(&cookie), None).await;
    assert_eq!(dashboard.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&dashboard), "/professional/onboarding");

    let onboarding = send(&app, Method::GET, "/professional/onboarding", Some(&cookie), None).await;
    assert_eq!(onboarding.status(), StatusCode::OK);
    let body = body_json(onboarding).await;
    assert_eq!(body["page"], "professional-onboarding");
    assert_eq!(body["data"]["professionalType"], "CA");
}

#[tokio::test]
async fn unfinished_professional_on_client_pages_is_sent_to_professional_onboarding() {
    let app = app().await;
    let cookie = sign_in(&app, "ca@example.com").await;

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&cookie), None).await;
    assert_eq!(dashboard.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&dashboard), "/professional/onboarding");

    let onboarding = send(&app, Method::GET, "/onboarding", Some(&cookie), None).await;
    assert_eq!(onboarding.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&onboarding), "/professional/onboarding");
}

#[tokio::test]
async fn home_sends_signed_in_users_to_their_landing_page() {
    let app = app().await;

    let anonymous = send(&app, Method::GET, "/", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(body_json(anonymous).await["page"], "home");

    let client = sign_in(&app, "client@example.com").await;
    let response = send(&app, Method::GET, "/", Some(&client), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let professional = sign_in(&app, "ca@example.com").await;
    let response = send(&app, Method::GET, "/", Some(&professional), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/professional/onboarding");
}

#[tokio::test]
async fn professional_onboarding_unlocks_the_dashboard() {
    let app = app().await;
    let cookie = sign_in(&app, "ca@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/api/professional/onboarding",
        Some(&cookie),
        Some(json!({ "fullName": "Priya Sharma", "licenseNumber": "CA-12345" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["isOnboardingComplete"], true);

    let dashboard = send(&app, Method::GET, "/professional/dashboard", Some(&cookie), None).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    let body = body_json(dashboard).await;
    assert_eq!(body["data"]["totalClients"], 4);
}

#[tokio::test]
async fn onboarded_client_sees_the_dashboard() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(&app, Method::GET, "/dashboard", Some(&cookie), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"], "dashboard");
    assert_eq!(body["data"]["company"]["name"], "Acme Corporation");
}

#[tokio::test]
async fn client_without_onboarding_is_sent_to_onboarding() {
    let app = app().await;
    let cookie = sign_in(&app, "founder@example.com").await;

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&cookie), None).await;
    assert_eq!(dashboard.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&dashboard), "/onboarding");

    let onboarding = send(&app, Method::GET, "/onboarding", Some(&cookie), None).await;
    assert_eq!(onboarding.status(), StatusCode::OK);
    let body = body_json(onboarding).await;
    assert_eq!(body["data"]["options"].as_array().unwrap().len(), 3);

    let response = send(
        &app,
        Method::POST,
        "/api/onboarding",
        Some(&cookie),
        Some(json!({ "structure": "private-limited" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let onboarding = send(&app, Method::GET, "/onboarding", Some(&cookie), None).await;
    assert_eq!(onboarding.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&onboarding), "/dashboard");
}

#[tokio::test]
async fn sign_up_completes_onboarding_for_both_roles() {
    let app = app().await;

    let client = open_session(&app).await;
    let response = send(
        &app,
        Method::POST,
        "/api/auth/sign-up",
        Some(&client),
        Some(json!({ "email": "new@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["isOnboardingComplete"], true);

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&client), None).await;
    assert_eq!(dashboard.status(), StatusCode::OK);

    let professional = open_session(&app).await;
    let response = send(
        &app,
        Method::POST,
        "/api/auth/sign-up",
        Some(&professional),
        Some(json!({
            "email": "cs@example.com",
            "password": "secret123",
            "role": "professional",
            "professionalType": "CS"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let dashboard = send(&app, Method::GET, "/professional/dashboard", Some(&professional), None).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
}

#[tokio::test]
async fn sign_out_clears_identity_and_protected_pages_redirect() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(&app, Method::POST, "/api/auth/sign-out", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let me = body_json(send(&app, Method::GET, "/api/auth/me", Some(&cookie), None).await).await;
    assert!(me["data"]["user"].is_null());

    let dashboard = send(&app, Method::GET, "/dashboard", Some(&cookie), None).await;
    assert_eq!(dashboard.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&dashboard), "/auth");
}

#[tokio::test]
async fn fresh_session_shows_the_loading_placeholder() {
    let app = app_with(&[("IDENTITY_RESOLVE_MS", "60000")]).await;

    let response = send(&app, Method::GET, "/professional/dashboard", None, None).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = body_json(response).await;
    assert_eq!(body, json!({ "loading": true }));
}

#[tokio::test]
async fn signed_in_visit_to_auth_goes_to_the_landing_page() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(&app, Method::GET, "/auth", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let anonymous = send(&app, Method::GET, "/auth?role=professional", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(body_json(anonymous).await["data"]["role"], "professional");
}

#[tokio::test]
async fn public_pages_render_without_a_session() {
    let app = app().await;

    for path in ["/", "/get-started", "/about", "/mission", "/contact", "/terms", "/privacy"] {
        let response = send(&app, Method::GET, path, None, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn unknown_paths_and_documents_render_not_found() {
    let app = app().await;

    let response = send(&app, Method::GET, "/nowhere", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["page"], "not-found");

    let cookie = sign_in(&app, "client@example.com").await;
    let response = send(&app, Method::GET, "/documents/missing", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["page"], "not-found");

    let response = send(
        &app,
        Method::GET,
        "/professional/clients/42",
        Some(&sign_in(&app, "client@example.com").await),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = app().await;
    let cookie = open_session(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/auth/sign-in",
        Some(&cookie),
        Some(json!({ "email": "client@example.com", "password": "wrong-password" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_sign_in_is_rejected_with_field_details() {
    let app = app().await;
    let cookie = open_session(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/auth/sign-in",
        Some(&cookie),
        Some(json!({ "email": "not-an-email", "password": "123" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());
}

#[tokio::test]
async fn simulated_failures_use_the_generic_message() {
    let app = app_with(&[("MOCK_FAILURE_RATE", "1.0")]).await;
    let cookie = open_session(&app).await;

    let response = send(
        &app,
        Method::POST,
        "/api/auth/sign-in",
        Some(&cookie),
        Some(json!({ "email": "client@example.com", "password": "password123" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["message"],
        "Something went wrong. Please try again."
    );
}

#[tokio::test]
async fn professional_api_rejects_clients() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(&app, Method::GET, "/api/professional/dashboard", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let anonymous = send(&app, Method::GET, "/api/documents", None, None).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn documents_can_be_uploaded_listed_and_deleted() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/api/documents",
        Some(&cookie),
        Some(json!({
            "name": "Board Resolution",
            "category": "Legal",
            "fileName": "resolution.pdf",
            "size": 2048
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let list = body_json(
        send(&app, Method::GET, "/api/documents?category=Legal", Some(&cookie), None).await,
    )
    .await;
    assert_eq!(list["data"]["documents"].as_array().unwrap().len(), 2);

    let page = send(&app, Method::GET, &format!("/documents/{id}"), Some(&cookie), None).await;
    assert_eq!(page.status(), StatusCode::OK);

    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/api/documents/{id}"),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let page = send(&app, Method::GET, &format!("/documents/{id}"), Some(&cookie), None).await;
    assert_eq!(page.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compliance_tabs_and_status_updates() {
    let app = app().await;
    let cookie = sign_in(&app, "client@example.com").await;

    let response = send(
        &app,
        Method::PATCH,
        "/api/compliances/task-1/status",
        Some(&cookie),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_json(
        send(&app, Method::GET, "/compliances?status=completed", Some(&cookie), None).await,
    )
    .await;
    assert_eq!(page["data"]["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(page["data"]["counts"]["completed"], 2);
}

#[tokio::test]
async fn metrics_expose_gate_decisions() {
    let app = app().await;
    send(&app, Method::GET, "/dashboard", None, None).await;

    let response = send(&app, Method::GET, "/metrics", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("route_gate_decisions_total{outcome=\"Redirect\"} 1"));
}
