//! Share-link composition for the dashboard.

/// Builds the shareable dashboard URL for a roadmap.
/// The id format is not validated; the dashboard 404s unknown ids.
pub fn compose_share_link(origin: &str, roadmap_id: &str) -> String {
    format!("{origin}/dashboard?roadmapId={roadmap_id}")
}
