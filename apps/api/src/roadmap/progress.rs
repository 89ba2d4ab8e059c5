//! Progress/completion engine — pure derivations over a roadmap's item set.
//!
//! `completed_items` on the row is the single authoritative source of
//! per-item state; everything here (percentage, per-item flags, category
//! buckets) is recomputed from it on every call and never cached. The PATCH
//! handler persists a toggle before reporting it back, so a store failure
//! leaves the caller's view at its pre-toggle value.

use crate::models::roadmap::{Category, RoadmapItem};

/// Symmetric membership toggle: adds `item_id` if absent, removes it if
/// present. Order of the surviving entries is preserved.
pub fn toggle_item(completed_items: &[String], item_id: &str) -> Vec<String> {
    if completed_items.iter().any(|id| id == item_id) {
        completed_items
            .iter()
            .filter(|id| id.as_str() != item_id)
            .cloned()
            .collect()
    } else {
        let mut next = completed_items.to_vec();
        next.push(item_id.to_owned());
        next
    }
}

/// Completion percentage: `round(100 * completed / total)`, 0 for an empty
/// item set.
pub fn completion_percent(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as i32
}

/// Toggles `item_id` within a roadmap's item set and recomputes progress.
///
/// Returns `None` when `item_id` does not name one of `items`. This is the
/// only write path for `completed_items`, so rejecting unknown ids here keeps
/// the persisted set a subset of real item ids and progress within 0–100.
pub fn apply_toggle(
    items: &[RoadmapItem],
    completed_items: &[String],
    item_id: &str,
) -> Option<(Vec<String>, i32)> {
    if !items.iter().any(|item| item.id == item_id) {
        return None;
    }
    let next = toggle_item(completed_items, item_id);
    let progress = completion_percent(next.len(), items.len());
    Some((next, progress))
}

/// Partitions items into the four fixed category buckets, in category order.
/// Buckets are disjoint and their union is the full item set.
pub fn partition_by_category(items: &[RoadmapItem]) -> Vec<(Category, Vec<&RoadmapItem>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            (
                category,
                items.iter().filter(|item| item.category == category).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roadmap::{Priority, RoadmapItem};

    fn item(id: &str, category: Category) -> RoadmapItem {
        RoadmapItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            description: String::new(),
            category,
            priority: Priority::Medium,
            estimated_weeks: 1,
            resources: vec![],
        }
    }

    #[test]
    fn test_toggle_adds_missing_id() {
        let completed = vec!["a".to_string()];
        assert_eq!(toggle_item(&completed, "b"), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_removes_present_id_preserving_order() {
        let completed = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(toggle_item(&completed, "b"), vec!["a", "c"]);
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let original = vec!["a".to_string(), "b".to_string()];
        let once = toggle_item(&original, "c");
        let twice = toggle_item(&once, "c");
        assert_eq!(twice, original);

        let once = toggle_item(&original, "a");
        let twice = toggle_item(&once, "a");
        // "a" comes back at the end; same membership either way
        assert_eq!(twice.len(), original.len());
        assert!(twice.contains(&"a".to_string()) && twice.contains(&"b".to_string()));
    }

    #[test]
    fn test_completion_percent_rounds() {
        assert_eq!(completion_percent(0, 13), 0);
        assert_eq!(completion_percent(1, 13), 8); // 7.69 rounds to 8
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(13, 13), 100);
    }

    #[test]
    fn test_completion_percent_empty_items_is_zero() {
        assert_eq!(completion_percent(0, 0), 0);
    }

    #[test]
    fn test_progress_invariant_over_toggle_sequence() {
        let items: Vec<RoadmapItem> = (0..13)
            .map(|i| item(&format!("i{i}"), Category::ALL[i % 4]))
            .collect();
        let mut completed: Vec<String> = vec![];
        for id in ["i0", "i5", "i5", "i12", "i3", "i0"] {
            completed = toggle_item(&completed, id);
            let progress = completion_percent(completed.len(), items.len());
            assert_eq!(
                progress,
                (100.0 * completed.len() as f64 / items.len() as f64).round() as i32
            );
        }
        // i0 and i5 toggled twice, so only i12 and i3 remain
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn test_apply_toggle_rejects_unknown_item_id() {
        let items = vec![item("a", Category::Foundation), item("b", Category::Technical)];
        let completed = vec!["a".to_string(), "b".to_string()];
        assert!(apply_toggle(&items, &completed, "zzz").is_none());
    }

    #[test]
    fn test_apply_toggle_keeps_progress_within_range() {
        let items = vec![item("a", Category::Foundation), item("b", Category::Technical)];
        let mut completed: Vec<String> = vec![];
        for id in ["a", "b", "zzz", "a", "b", "b"] {
            if let Some((next, progress)) = apply_toggle(&items, &completed, id) {
                assert!((0..=100).contains(&progress), "progress escaped its range: {progress}");
                assert!(next.len() <= items.len());
                completed = next;
            }
        }
        // a toggled twice, b three times
        assert_eq!(completed, vec!["b"]);
    }

    #[test]
    fn test_apply_toggle_recomputes_progress() {
        let items = vec![item("a", Category::Foundation), item("b", Category::Technical)];
        let (completed, progress) = apply_toggle(&items, &[], "a").unwrap();
        assert_eq!(progress, 50);
        let (completed, progress) = apply_toggle(&items, &completed, "b").unwrap();
        assert_eq!(progress, 100);
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn test_category_buckets_form_a_partition() {
        let items = vec![
            item("a", Category::Foundation),
            item("b", Category::Technical),
            item("c", Category::Technical),
            item("d", Category::Practical),
            item("e", Category::Career),
        ];
        let buckets = partition_by_category(&items);
        assert_eq!(buckets.len(), 4);

        let total: usize = buckets.iter().map(|(_, b)| b.len()).sum();
        assert_eq!(total, items.len());

        for (category, bucket) in &buckets {
            assert!(bucket.iter().all(|i| i.category == *category));
        }
    }

    #[test]
    fn test_partition_of_empty_item_set() {
        let buckets = partition_by_category(&[]);
        assert!(buckets.iter().all(|(_, b)| b.is_empty()));
    }
}
