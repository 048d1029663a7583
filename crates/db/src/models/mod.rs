pub mod project;
pub mod submission;
pub mod user;
