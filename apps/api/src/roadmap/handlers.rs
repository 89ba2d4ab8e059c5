//! Axum route handlers for the roadmap API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::roadmap::{Category, Phase, RoadmapItem};
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::progress::{apply_toggle, partition_by_category};
use crate::roadmap::share::compose_share_link;
use crate::roadmap::store::{fetch_roadmap, update_progress};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoadmapCreatedResponse {
    pub success: bool,
    #[serde(rename = "roadmapId")]
    pub roadmap_id: Uuid,
    #[serde(rename = "profileId")]
    pub profile_id: Uuid,
}

/// A roadmap item with its derived completion flag. `completed` is computed
/// from the row's `completed_items` at read time and never persisted on the
/// item itself.
#[derive(Debug, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: RoadmapItem,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub item_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapDetailResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub summary: String,
    #[serde(rename = "totalWeeks")]
    pub total_weeks: u32,
    pub phases: Vec<Phase>,
    pub items: Vec<ItemView>,
    pub progress: i32,
    pub completed_items: Vec<String>,
    pub categories: Vec<CategoryBucket>,
    pub share_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ToggleItemResponse {
    pub completed: bool,
    pub progress: i32,
    pub completed_items: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmap
///
/// Full generation pipeline: prompt → completion → extraction → persist.
/// On any generation failure nothing is persisted. Not idempotent — two
/// identical requests produce two independent roadmaps.
pub async fn handle_create_roadmap(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<RoadmapCreatedResponse>, AppError> {
    profile.validate().map_err(AppError::Validation)?;

    let generated = generate_roadmap(&state.db, state.llm.as_ref(), &profile).await?;

    Ok(Json(RoadmapCreatedResponse {
        success: true,
        roadmap_id: generated.roadmap_id,
        profile_id: generated.profile_id,
    }))
}

/// GET /api/v1/roadmap/:id
///
/// Returns the stored roadmap with everything the dashboard derives on
/// render: per-item completion flags, progress, category buckets, and the
/// share URL.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
) -> Result<Json<RoadmapDetailResponse>, AppError> {
    let row = fetch_roadmap(&state.db, roadmap_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))?;

    let payload = row.payload().map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Stored roadmap {roadmap_id} is corrupt: {e}"))
    })?;

    let categories = partition_by_category(&payload.items)
        .into_iter()
        .map(|(category, items)| CategoryBucket {
            category,
            item_ids: items.iter().map(|item| item.id.clone()).collect(),
        })
        .collect();

    let items = payload
        .items
        .into_iter()
        .map(|item| ItemView {
            completed: row.completed_items.contains(&item.id),
            item,
        })
        .collect();

    Ok(Json(RoadmapDetailResponse {
        id: row.id,
        user_id: row.user_id,
        summary: payload.summary,
        total_weeks: payload.total_weeks,
        phases: payload.phases,
        items,
        progress: row.progress,
        completed_items: row.completed_items,
        categories,
        share_url: compose_share_link(&state.config.public_origin, &roadmap_id.to_string()),
        created_at: row.created_at,
    }))
}

/// PATCH /api/v1/roadmap/:id/items/:item_id
///
/// Toggles one item's completion and recomputes progress from the
/// authoritative set. Ids not present in the roadmap's items are a 404, so
/// the persisted set stays a subset of real item ids.
/// Confirm-then-commit: the store write happens before the
/// response is built, so a failed write leaves the caller's state untouched.
/// Concurrent toggles resolve last-writer-wins at the store.
pub async fn handle_toggle_item(
    State(state): State<AppState>,
    Path((roadmap_id, item_id)): Path<(Uuid, String)>,
) -> Result<Json<ToggleItemResponse>, AppError> {
    let row = fetch_roadmap(&state.db, roadmap_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))?;

    let payload = row.payload().map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Stored roadmap {roadmap_id} is corrupt: {e}"))
    })?;

    let (completed_items, progress) = apply_toggle(&payload.items, &row.completed_items, &item_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Item {item_id} not found in roadmap {roadmap_id}"))
        })?;

    update_progress(&state.db, roadmap_id, &completed_items, progress).await?;

    Ok(Json(ToggleItemResponse {
        completed: completed_items.contains(&item_id),
        progress,
        completed_items,
    }))
}
