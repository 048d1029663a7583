//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `cncdesign_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod health;
pub mod projects;
pub mod submissions;

use serde::Serialize;

/// Body returned by successful DELETE operations.
///
/// Deletes return `200 {"success": true}` rather than a bare 204; a second
/// delete of the same id is a 404.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
