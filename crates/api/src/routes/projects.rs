//! Route definitions for the project catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes. Reads are public, writes require an admin token.
///
/// `/projects/featured` is registered before the `{id}` matcher picks up
/// anything; axum routes static segments ahead of captures, so the two
/// never conflict.
///
/// ```text
/// GET    /projects           -> list (public)
/// POST   /projects           -> create (admin)
/// GET    /projects/featured  -> list_featured (public)
/// GET    /projects/{id}      -> get_by_id (public)
/// PATCH  /projects/{id}      -> update (admin)
/// DELETE /projects/{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list).post(projects::create))
        .route("/projects/featured", get(projects::list_featured))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .patch(projects::update)
                .delete(projects::delete),
        )
}
