use crate::config::Config;
use crate::prediction::pipeline::PlacementPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring pipeline holding the classifier loaded at startup. Read-only.
    pub pipeline: PlacementPipeline,
}
