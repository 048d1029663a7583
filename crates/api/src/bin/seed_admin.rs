//! One-shot seeder for the admin account.
//!
//! Accounts are never created through the API; this binary is the only
//! write path. Safe to re-run: an existing account gets its password
//! hash replaced and keeps its id.
//!
//! ```text
//! ADMIN_PASSWORD=... cargo run --bin seed-admin
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cncdesign_api::auth::password::hash_password;
use cncdesign_db::repositories::UserRepo;

const DEFAULT_ADMIN_EMAIL: &str = "admin@cncdesign.com";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let password = std::env::var("ADMIN_PASSWORD")
        .expect("ADMIN_PASSWORD must be set (never seed with a default password)");

    let pool = cncdesign_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    cncdesign_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let password_hash = hash_password(&password).expect("Failed to hash password");

    let user = UserRepo::upsert_admin(&pool, &email, &password_hash)
        .await
        .expect("Failed to upsert admin account");

    tracing::info!(user_id = %user.id, email = %user.email, "Admin account seeded");
}
