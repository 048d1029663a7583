//! Route definitions.
//!
//! Each submodule builds a [`Router`] for one resource with its full
//! paths spelled out; [`app_routes`] merges them into the single route
//! tree the server and the tests mount.

pub mod auth;
pub mod health;
pub mod projects;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// The complete route tree, before middleware layers.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(submissions::router())
        .merge(projects::router())
}
