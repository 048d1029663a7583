//! Repository for the `users` table.

use cncdesign_core::roles::ROLE_ADMIN;
use cncdesign_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, role, created_at, updated_at";

/// Provides lookups and the out-of-band seed upsert for admin accounts.
///
/// There is deliberately no delete: accounts are managed only by the
/// seed binary, never through the API.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by email, case-insensitively.
    ///
    /// Emails are stored lowercased; the input is normalized here so
    /// callers do not have to.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim().to_lowercase())
            .fetch_optional(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create or update the admin account for the given email.
    ///
    /// Used by the `seed-admin` binary only. An existing row keeps its id
    /// but gets the new password hash and the admin role.
    pub async fn upsert_admin(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_users_email
             DO UPDATE SET password_hash = EXCLUDED.password_hash,
                           role = EXCLUDED.role,
                           updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim().to_lowercase())
            .bind(password_hash)
            .bind(ROLE_ADMIN)
            .fetch_one(pool)
            .await
    }
}
