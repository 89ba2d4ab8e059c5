//! Persistence adapter for the `profiles` and `roadmaps` collections.
//!
//! Each operation is a single round trip. The roadmap-creation flow performs
//! two independent inserts with no spanning transaction: if the roadmap
//! insert fails after the profile insert succeeded, the orphaned profile row
//! stays (known limitation). Progress updates are last-writer-wins with no
//! optimistic-concurrency check.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::roadmap::{RoadmapPayload, RoadmapRow};

/// Inserts a profile row and returns its generated id.
pub async fn insert_profile(pool: &PgPool, profile: &Profile) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    let background = serde_json::to_value(&profile.background)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize background: {e}")))?;
    let years_experience = i32::try_from(profile.years_experience)
        .map_err(|_| AppError::Validation("years_experience is out of range".to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO profiles
            (id, current_role_title, years_experience, target_role_title, location, background)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(&profile.current_role_title)
    .bind(years_experience)
    .bind(&profile.target_role_title)
    .bind(&profile.location)
    .bind(&background)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Inserts a freshly generated roadmap keyed by its profile's id.
/// New roadmaps always start at progress 0 with nothing completed.
pub async fn insert_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    payload: &RoadmapPayload,
) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    let roadmap_data = serde_json::to_value(payload)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize roadmap: {e}")))?;
    let completed_items: Vec<String> = Vec::new();

    sqlx::query(
        r#"
        INSERT INTO roadmaps (id, user_id, roadmap_data, progress, completed_items)
        VALUES ($1, $2, $3, 0, $4)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&roadmap_data)
    .bind(&completed_items)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Persists the completion set and its recomputed progress for a roadmap.
pub async fn update_progress(
    pool: &PgPool,
    roadmap_id: Uuid,
    completed_items: &[String],
    progress: i32,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE roadmaps SET completed_items = $2, progress = $3 WHERE id = $1",
    )
    .bind(roadmap_id)
    .bind(completed_items)
    .bind(progress)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Roadmap {roadmap_id} not found")));
    }

    Ok(())
}

/// Fetches a roadmap row, or `None` when no such id exists.
pub async fn fetch_roadmap(pool: &PgPool, roadmap_id: Uuid) -> Result<Option<RoadmapRow>, AppError> {
    let row = sqlx::query_as::<_, RoadmapRow>("SELECT * FROM roadmaps WHERE id = $1")
        .bind(roadmap_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}
