//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use cncdesign_core::error::CoreError;
use cncdesign_core::types::DbId;

use crate::auth::jwt::{validate_token, TokenValidation};
use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie set by login and cleared by logout.
pub const ADMIN_COOKIE: &str = "admin_token";

/// Authenticated admin extracted from a request.
///
/// API clients send `Authorization: Bearer <token>`; the browser carries
/// the same token in the `admin_token` cookie. The header wins when both
/// are present. Use this as an extractor parameter in any handler that
/// requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The email embedded at issuance time.
    pub email: String,
    /// The user's role name (e.g. `"admin"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .or_else(|| cookie_token(&parts.headers))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("No token provided".into()))
            })?;

        match validate_token(&token, &state.config.jwt) {
            TokenValidation::Valid(claims) => Ok(AuthUser {
                user_id: claims.sub,
                email: claims.email,
                role: claims.role,
            }),
            TokenValidation::Expired => Err(AppError::Core(CoreError::Unauthorized(
                "Token expired".into(),
            ))),
            TokenValidation::Invalid => Err(AppError::Core(CoreError::Unauthorized(
                "Invalid token".into(),
            ))),
        }
    }
}

/// Pull a token out of the `Authorization: Bearer ...` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.trim().strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Pull a token out of the `admin_token` cookie, if present.
pub(crate) fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(COOKIE)?.to_str().ok()?;
    for pair in value.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == ADMIN_COOKIE && !val.is_empty() {
            return Some(val.to_string());
        }
    }
    None
}
