//! Handlers for the portfolio project catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cncdesign_core::error::CoreError;
use cncdesign_core::project::ProjectCategory;
use cncdesign_core::types::DbId;
use cncdesign_db::models::project::{CreateProject, Project, UpdateProject};
use cncdesign_db::repositories::ProjectRepo;

use super::DeleteResponse;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Maximum number of projects returned by the featured listing.
const FEATURED_LIMIT: i64 = 6;

fn validate_category(category: &str) -> Result<(), AppError> {
    category
        .parse::<ProjectCategory>()
        .map(|_| ())
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

fn require_non_empty(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::Core(CoreError::Validation(format!(
            "{name} is required"
        ))))
    } else {
        Ok(())
    }
}

/// POST /projects
///
/// Admin-only. Both language variants of title and description are
/// mandatory; a project is never created half-translated.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    require_non_empty(&input.title_en, "English title")?;
    require_non_empty(&input.title_am, "Amharic title")?;
    require_non_empty(&input.description_en, "English description")?;
    require_non_empty(&input.description_am, "Amharic description")?;
    validate_category(&input.category)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
///
/// Public. Full catalog, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /projects/featured
///
/// Public. Homepage subset: featured projects only, capped at
/// [`FEATURED_LIMIT`].
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_featured(&state.pool, FEATURED_LIMIT).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PATCH /projects/{id}
///
/// Admin-only partial update; omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(category) = input.category.as_deref() {
        validate_category(category)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
