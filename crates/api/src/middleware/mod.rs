//! Authentication and authorization middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a Bearer
//!   token or the `admin_token` cookie.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`gate::admin_gate`] -- Edge check for admin page paths; redirects
//!   unauthenticated navigations to the login page.

pub mod auth;
pub mod gate;
pub mod rbac;
