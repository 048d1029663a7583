//! Repository for the `contact_submissions` table.

use cncdesign_core::submission::SubmissionStatus;
use cncdesign_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{ContactSubmission, CreateSubmission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, project_type, description, budget, \
                        timeline, images, files, status, language, created_at, updated_at";

/// Provides CRUD operations for contact submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with status `pending`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions
                (name, email, phone, project_type, description, budget, timeline,
                 images, files, status, language)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.project_type)
            .bind(&input.description)
            .bind(&input.budget)
            .bind(&input.timeline)
            .bind(&input.images)
            .bind(&input.files)
            .bind(SubmissionStatus::Pending.as_str())
            .bind(input.language.as_str())
            .fetch_one(pool)
            .await
    }

    /// List all submissions, newest first. No pagination: the expected
    /// scale is low hundreds of rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a submission's status, advancing `updated_at`.
    ///
    /// The status is typed, so only members of the fixed set can reach
    /// this query. Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions
             SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission. Returns `true` if a row was removed.
    ///
    /// Attachment URLs in the row point at external storage; cleaning
    /// those objects up is an out-of-band responsibility.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
