//! Repository for the `projects` table.

use cncdesign_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_en, title_am, description_en, description_am, \
                        category, materials, dimensions, images, featured, created_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `category` must already be validated against the known set; the
    /// column CHECK is the backstop.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title_en, title_am, description_en, description_am, category,
                 materials, dimensions, images, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title_en)
            .bind(&input.title_am)
            .bind(&input.description_en)
            .bind(&input.description_am)
            .bind(&input.category)
            .bind(&input.materials)
            .bind(Json(&input.dimensions))
            .bind(&input.images)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List featured projects, newest first, up to `limit` rows.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE featured = true
             ORDER BY created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title_en = COALESCE($2, title_en),
                title_am = COALESCE($3, title_am),
                description_en = COALESCE($4, description_en),
                description_am = COALESCE($5, description_am),
                category = COALESCE($6, category),
                materials = COALESCE($7, materials),
                dimensions = COALESCE($8, dimensions),
                images = COALESCE($9, images),
                featured = COALESCE($10, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_am)
            .bind(&input.description_en)
            .bind(&input.description_am)
            .bind(&input.category)
            .bind(&input.materials)
            .bind(input.dimensions.as_ref().map(Json))
            .bind(&input.images)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
