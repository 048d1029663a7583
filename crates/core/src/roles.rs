//! Well-known role name constants.
//!
//! These must match the seed data written by the `seed-admin` binary.

pub const ROLE_ADMIN: &str = "admin";
