//! Domain types shared by the persistence and API crates.

pub mod error;
pub mod project;
pub mod roles;
pub mod submission;
pub mod types;
