//! Axum route handlers for the Skills API.

use anyhow::Context;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractSkillsRequest {
    /// Untyped so a non-string value is rejected the same way as a missing one.
    pub job_description: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/extract-skills
///
/// Returns the vocabulary terms mentioned in a job description.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    payload: Result<Json<ExtractSkillsRequest>, JsonRejection>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let Json(request) = payload?;

    let text = match request.job_description {
        Some(Value::String(text)) => text,
        _ => {
            return Err(AppError::Validation(
                "Job description is required".to_string(),
            ))
        }
    };

    // Input length is unbounded; keep the regex sweep off the async workers.
    let extractor = state.skill_extractor.clone();
    let skills = tokio::task::spawn_blocking(move || extractor.extract(&text))
        .await
        .context("skill extraction task panicked")?;

    debug!("Extracted {} skills", skills.len());

    Ok(Json(ExtractSkillsResponse { skills }))
}
