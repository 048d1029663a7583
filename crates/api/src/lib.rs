//! CNC Design API server library.
//!
//! Exposes the building blocks (config, state, auth, error handling,
//! routes) so integration tests, the server binary, and the seed binary
//! can all access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
