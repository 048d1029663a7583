//! Contact-submission entity model and DTOs.

use cncdesign_core::submission::Language;
use cncdesign_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full submission row from the `contact_submissions` table.
///
/// Serialized with camelCase keys to match the public API payloads
/// (`projectType`, `createdAt`, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    /// URLs of uploaded images in external storage.
    pub images: Vec<String>,
    /// URLs of other uploaded attachments.
    pub files: Vec<String>,
    /// One of [`cncdesign_core::submission::SubmissionStatus::ALL`]; the
    /// column CHECK enforces membership.
    pub status: String,
    pub language: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new submission from the public contact form.
///
/// Fields are already validated and trimmed by the handler; `status` is
/// always `pending` on insert and is not part of this DTO.
#[derive(Debug)]
pub struct CreateSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub images: Vec<String>,
    pub files: Vec<String>,
    pub language: Language,
}
