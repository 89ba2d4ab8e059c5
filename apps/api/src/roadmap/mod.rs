// Roadmap generation pipeline: prompt build → completion call → extraction →
// persistence, plus the progress-tracking and share-link pieces the dashboard
// consumes. All LLM calls go through llm_client.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod progress;
pub mod prompts;
pub mod share;
pub mod store;
