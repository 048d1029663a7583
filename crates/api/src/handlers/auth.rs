//! Handlers for admin authentication (login, verify, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::Json;
use cncdesign_core::error::CoreError;
use cncdesign_core::roles::ROLE_ADMIN;
use cncdesign_db::models::user::UserInfo;
use cncdesign_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, ADMIN_COOKIE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`.
///
/// Fields are optional so a missing key surfaces as our own 400 instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
///
/// The token is delivered twice on purpose: in the body for the admin
/// UI's `Authorization` header use, and as an `HttpOnly` cookie for the
/// request gate. Logout must clear both.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Response for `GET /admin/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserInfo,
}

/// Response for `POST /admin/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/login
///
/// Authenticate with email + password. Returns the session token in the
/// body and sets the `admin_token` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(HeaderMap, Json<LoginResponse>)> {
    // 1. Both fields present and non-blank.
    let email = input.email.as_deref().map(str::trim).unwrap_or_default();
    let password = input.password.as_deref().unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }

    // 2. Find user by case-normalized email. Unknown emails surface the
    //    same 401 as a wrong password so responses don't enumerate accounts.
    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    // 3. Only admin accounts may authenticate to this surface.
    if user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin role required".into(),
        )));
    }

    // 4. Verify password (the deliberately slow step).
    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    // 5. Issue the session token, in body and cookie together.
    let token = generate_token(user.id, &user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        session_cookie(&token, state.config.jwt.expiry_hours)
            .map_err(|e| AppError::InternalError(format!("Cookie encoding error: {e}")))?,
    );

    let response = LoginResponse {
        token,
        user: UserInfo::from(&user),
    };
    Ok((headers, Json(response)))
}

/// GET /admin/verify
///
/// Deeper session check than the gate: on top of token validation, the
/// subject must still exist in the credential store. Advisory -- the
/// gate and extractors do not require it.
pub async fn verify(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<VerifyResponse>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User not found".into())))?;

    Ok(Json(VerifyResponse {
        valid: true,
        user: UserInfo::from(&record),
    }))
}

/// POST /admin/logout
///
/// The one canonical logout: clears the cookie carrier here; the client
/// drops its body-delivered copy on the same response. Tokens are
/// stateless, so there is nothing server-side to revoke.
pub async fn logout() -> (HeaderMap, Json<LogoutResponse>) {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, clear_session_cookie());
    (headers, Json(LogoutResponse { success: true }))
}

// ---------------------------------------------------------------------------
// Cookie construction
// ---------------------------------------------------------------------------

/// Build the `HttpOnly` session cookie carrying the token.
fn session_cookie(
    token: &str,
    expiry_hours: i64,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let max_age = expiry_hours * 3600;
    let cookie =
        format!("{ADMIN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}");
    HeaderValue::from_str(&cookie)
}

/// Expire the session cookie immediately. Shared with the request gate,
/// which clears stale cookies on redirect.
pub(crate) fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("admin_token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}
