//! Portfolio-entry entity model and DTOs.

use cncdesign_core::project::Dimensions;
use cncdesign_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full project row from the `projects` table.
///
/// Serialized with camelCase keys (`titleEn`, `descriptionAm`, ...) to
/// match the public API payloads.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title_en: String,
    pub title_am: String,
    pub description_en: String,
    pub description_am: String,
    /// One of `living`/`bedroom`/`office`/`commercial`; CHECK-enforced.
    pub category: String,
    /// Ordered list of materials as shown on the site.
    pub materials: Vec<String>,
    pub dimensions: Json<Dimensions>,
    /// Ordered list of image URLs in external storage.
    pub images: Vec<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title_en: String,
    pub title_am: String,
    pub description_en: String,
    pub description_am: String,
    pub category: String,
    #[serde(default)]
    pub materials: Vec<String>,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// DTO for updating an existing project. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title_en: Option<String>,
    pub title_am: Option<String>,
    pub description_en: Option<String>,
    pub description_am: Option<String>,
    pub category: Option<String>,
    pub materials: Option<Vec<String>>,
    pub dimensions: Option<Dimensions>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
}
