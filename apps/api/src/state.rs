use std::sync::Arc;

use crate::projects::generator::ProjectGenerator;
use crate::skills::extractor::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Compiled once at startup, read-only afterwards.
    pub skill_extractor: Arc<SkillExtractor>,
    /// Pluggable project backend. Default: LlmProjectGenerator.
    pub project_generator: Arc<dyn ProjectGenerator>,
}
