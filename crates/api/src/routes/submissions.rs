//! Route definitions for contact submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes.
///
/// The list endpoint appears twice: `/contact` kept the GET handler when
/// the admin dashboard moved to `/admin/submissions`, and older clients
/// still call it there.
///
/// ```text
/// POST   /contact            -> create (public, JSON or form)
/// GET    /contact            -> list (admin)
/// GET    /admin/submissions  -> list (admin)
/// GET    /submissions/{id}   -> get_by_id (public)
/// PATCH  /submissions/{id}   -> update_status (admin)
/// DELETE /submissions/{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            post(submissions::create).get(submissions::list),
        )
        .route("/admin/submissions", get(submissions::list))
        .route(
            "/submissions/{id}",
            get(submissions::get_by_id)
                .patch(submissions::update_status)
                .delete(submissions::delete),
        )
}
