//! Edge request gate for admin page paths.
//!
//! Runs once per request, before any handler, for paths under the
//! admin-designated prefixes. Only local signature verification happens
//! here -- never a database round trip -- so the check stays cheap enough
//! to sit in front of everything.
//!
//! Unauthenticated page navigations are redirected to the login page with
//! the originally requested path preserved in `from=`, and any stale
//! cookie is cleared. API-style requests (no `text/html` in `Accept`)
//! get a plain 401 instead of a redirect.

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use cncdesign_core::error::CoreError;

use super::auth::{bearer_token, cookie_token};
use crate::auth::jwt::{validate_token, TokenValidation};
use crate::error::AppError;
use crate::handlers::auth::clear_session_cookie;
use crate::state::AppState;

/// Page paths that require an authenticated admin before they are served.
///
/// `/admin/login` is deliberately absent: it must stay reachable without
/// a session.
pub const ADMIN_PAGE_PREFIXES: &[&str] = &[
    "/admin/dashboard",
    "/admin/projects",
    "/admin/submissions",
];

/// Login entry point unauthenticated navigations are sent to.
pub const LOGIN_PATH: &str = "/admin/login";

/// Gate middleware: allow valid sessions through untouched, turn everything
/// else away before handler logic runs.
pub async fn admin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if !ADMIN_PAGE_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return next.run(request).await;
    }

    // Cookie first: page navigations carry the session there. The header
    // is the fallback for API-style callers hitting gated paths.
    let token = cookie_token(request.headers()).or_else(|| bearer_token(request.headers()));

    if let Some(token) = token {
        if let TokenValidation::Valid(_) = validate_token(&token, &state.config.jwt) {
            return next.run(request).await;
        }
    }

    if accepts_html(request.headers()) {
        let from = request.uri().path().to_string();
        redirect_to_login(&from)
    } else {
        AppError::Core(CoreError::Unauthorized("Authentication required".into())).into_response()
    }
}

/// 303 to the login page, preserving the original path and clearing any
/// stale session cookie.
fn redirect_to_login(from: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();

    let location = format!("{LOGIN_PATH}?from={from}");
    let location = HeaderValue::from_str(&location)
        .unwrap_or_else(|_| HeaderValue::from_static(LOGIN_PATH));
    response.headers_mut().insert(LOCATION, location);
    response
        .headers_mut()
        .insert(SET_COOKIE, clear_session_cookie());

    response
}

/// Whether the client is navigating (browser page load) rather than
/// calling the API.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}
