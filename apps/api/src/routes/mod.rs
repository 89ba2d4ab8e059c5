pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::resume;
use crate::roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route("/api/v1/roadmap", post(roadmap::handlers::handle_create_roadmap))
        .route(
            "/api/v1/roadmap/:id",
            get(roadmap::handlers::handle_get_roadmap),
        )
        .route(
            "/api/v1/roadmap/:id/items/:item_id",
            patch(roadmap::handlers::handle_toggle_item),
        )
        // Resume API
        .route(
            "/api/v1/optimize-resume",
            post(resume::handlers::handle_optimize_resume),
        )
        .route(
            "/api/v1/parse-pdf",
            post(resume::handlers::handle_parse_pdf),
        )
        .with_state(state)
}
