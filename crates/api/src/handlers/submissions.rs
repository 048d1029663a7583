//! Handlers for contact submissions: public intake plus the admin
//! follow-up workflow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cncdesign_core::error::CoreError;
use cncdesign_core::submission::{Language, SubmissionStatus};
use cncdesign_core::types::DbId;
use cncdesign_db::models::submission::{ContactSubmission, CreateSubmission};
use cncdesign_db::repositories::SubmissionRepo;
use serde::Deserialize;

use super::DeleteResponse;
use crate::error::{AppError, AppResult};
use crate::extract::JsonOrForm;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Payload of the public contact form (`POST /contact`).
///
/// Arrives as JSON or form-encoded; field names are the camelCase ones
/// the site sends. Attachment URLs point at objects the client already
/// uploaded to external storage.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
    pub language: Option<String>,
}

/// Body for `PATCH /submissions/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /contact
///
/// Public: no authentication. Creates a `pending` submission in the
/// client-declared language (default English).
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<ContactRequest>,
) -> AppResult<(StatusCode, Json<ContactSubmission>)> {
    let required = |field: Option<&str>, name: &str| -> Result<String, AppError> {
        let value = field.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            Err(AppError::Core(CoreError::Validation(format!(
                "{name} is required"
            ))))
        } else {
            Ok(value.to_string())
        }
    };

    let language = match input.language.as_deref() {
        None | Some("") => Language::default(),
        Some(tag) => tag
            .parse::<Language>()
            .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?,
    };

    let create = CreateSubmission {
        name: required(input.name.as_deref(), "Name")?,
        email: required(input.email.as_deref(), "Email")?,
        phone: required(input.phone.as_deref(), "Phone")?,
        project_type: required(input.project_type.as_deref(), "Project type")?,
        description: required(input.description.as_deref(), "Description")?,
        budget: input.budget.filter(|s| !s.trim().is_empty()),
        timeline: input.timeline.filter(|s| !s.trim().is_empty()),
        images: input.images,
        files: input.files,
        language,
    };

    let submission = SubmissionRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /admin/submissions (and the consolidated GET /contact)
///
/// Admin-only. Full list, newest first, no pagination.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ContactSubmission>>> {
    let submissions = SubmissionRepo::list(&state.pool).await?;
    Ok(Json(submissions))
}

/// GET /submissions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactSubmission>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;
    Ok(Json(submission))
}

/// PATCH /submissions/{id}
///
/// Admin-only. Any member of the status set may replace any other; a
/// value outside the set is rejected before the row is touched.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<ContactSubmission>> {
    let status = input
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Status is required".into())))?;

    let status = status
        .parse::<SubmissionStatus>()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let submission = SubmissionRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;
    Ok(Json(submission))
}

/// DELETE /submissions/{id}
///
/// Admin-only, irreversible. The row's attachment URLs are left for
/// out-of-band storage cleanup.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = SubmissionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))
    }
}
