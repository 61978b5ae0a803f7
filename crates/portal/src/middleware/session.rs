use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::{DynJwtService, DynSessionStore},
    config::SESSION_TOKEN_TYPE,
    errors::HttpError,
};
use tracing::debug;

pub const SESSION_COOKIE: &str = "token";

/// Id of the store session the current request belongs to.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

fn request_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        })
}

/// Resumes the session named by the token, or opens a fresh one and hands
/// its token back as a cookie.
pub async fn session_middleware(
    cookie_jar: CookieJar,
    Extension(store): Extension<DynSessionStore>,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    let resumed = match request_token(&cookie_jar, &req) {
        Some(token) => match jwt.verify_token(&token, SESSION_TOKEN_TYPE) {
            Ok(session_id) => store.find_session(&session_id).await,
            Err(err) => {
                debug!("Discarding session token: {err}");
                None
            }
        },
        None => None,
    };

    let (session, cookie_jar) = match resumed {
        Some(record) => (record, None),
        None => {
            let record = store.open_session().await;
            let token = jwt.generate_token(&record.id, SESSION_TOKEN_TYPE)?;
            debug!("Issued session {}", record.id);

            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();

            (record, Some(cookie_jar.add(cookie)))
        }
    };

    req.extensions_mut().insert(SessionId(session.id));

    let response = next.run(req).await;

    Ok((cookie_jar, response).into_response())
}
