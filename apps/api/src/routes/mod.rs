pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::projects::handlers::handle_generate_project;
use crate::skills::handlers::handle_extract_skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/extract-skills", post(handle_extract_skills))
        .route("/api/generate", post(handle_generate_project))
        .with_state(state)
}
