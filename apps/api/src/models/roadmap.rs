//! Roadmap model — the generated learning plan and its persisted row.
//!
//! `RoadmapPayload` is the document the model produces (wire names are
//! camelCase to match the prompt's schema block). The typed enums double as
//! schema validation: an out-of-range category/priority/resource type fails
//! deserialization instead of passing through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Item category. One of the four fixed buckets the dashboard groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Foundation,
    Technical,
    Practical,
    Career,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Foundation,
        Category::Technical,
        Category::Practical,
        Category::Career,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Article,
    Video,
    Book,
    Tool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub free: bool,
}

/// One actionable learning unit.
///
/// `id` is model-generated and only unique within its roadmap. Per-item
/// completion is never stored here — it is derived from the row's
/// `completed_items` set at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    #[serde(rename = "estimatedWeeks")]
    pub estimated_weeks: u32,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub focus: String,
}

/// The model-generated roadmap document, as persisted in
/// `roadmaps.roadmap_data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPayload {
    pub summary: String,
    #[serde(rename = "totalWeeks")]
    pub total_weeks: u32,
    pub phases: Vec<Phase>,
    pub items: Vec<RoadmapItem>,
}

/// A persisted roadmap row. `progress` and `completed_items` live beside the
/// payload; `completed_items` is the authoritative source of per-item state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub roadmap_data: Value,
    pub progress: i32,
    pub completed_items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RoadmapRow {
    /// Decodes the stored payload. Fails only if the stored document no
    /// longer matches the schema it was validated against on insert.
    pub fn payload(&self) -> Result<RoadmapPayload, serde_json::Error> {
        serde_json::from_value(self.roadmap_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_round_trips_with_wire_names() {
        let json = serde_json::json!({
            "id": "item-1",
            "title": "Learn prompt engineering",
            "description": "Structured prompting for production LLM apps",
            "category": "technical",
            "priority": "high",
            "estimatedWeeks": 2,
            "resources": [
                {"title": "Docs", "url": "https://docs.anthropic.com", "type": "article", "free": true}
            ]
        });
        let item: RoadmapItem = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(item.category, Category::Technical);
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.estimated_weeks, 2);
        assert_eq!(item.resources[0].resource_type, ResourceType::Article);

        // camelCase wire names survive serialization
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["estimatedWeeks"], 2);
        assert_eq!(back["resources"][0]["type"], "article");
        assert_eq!(back, json);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<Category, _> = serde_json::from_str(r#""advanced""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_resource_type_is_rejected() {
        let result: Result<ResourceType, _> = serde_json::from_str(r#""podcast""#);
        assert!(result.is_err());
    }
}
