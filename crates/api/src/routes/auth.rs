//! Route definitions for admin authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes.
///
/// ```text
/// POST /admin/login   -> login (public)
/// GET  /admin/verify  -> verify (requires token)
/// POST /admin/logout  -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(auth::login))
        .route("/admin/verify", get(auth::verify))
        .route("/admin/logout", post(auth::logout))
}
