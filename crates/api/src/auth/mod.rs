//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- admin session token generation and the single shared
//!   validation routine used by the edge gate, the extractor, and the
//!   verify endpoint.

pub mod jwt;
pub mod password;
