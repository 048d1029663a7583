//! Route definition for the health check.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// ```text
/// GET /health -> health (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
