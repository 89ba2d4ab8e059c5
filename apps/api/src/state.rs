use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum
/// extractors. Constructed once at startup; handlers never build their own
/// clients.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion backend behind a trait object so handler pipelines can be
    /// tested against a scripted model.
    pub llm: Arc<dyn CompletionModel>,
    pub config: Config,
}
