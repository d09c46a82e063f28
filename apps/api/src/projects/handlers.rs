//! Axum route handlers for the Projects API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::projects::models::{GenerateRequest, Project};
use crate::state::AppState;

/// Raw request body. Fields stay untyped so a wrong type is reported with the
/// same message as a missing field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequestBody {
    pub skills: Option<Value>,
    pub difficulty: Option<Value>,
    pub duration: Option<Value>,
}

impl TryFrom<GenerateRequestBody> for GenerateRequest {
    type Error = AppError;

    fn try_from(body: GenerateRequestBody) -> Result<Self, Self::Error> {
        let skills = match body.skills {
            Some(Value::Array(items)) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(AppError::Validation("Each skill must be a string".to_string())),
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => {
                return Err(AppError::Validation(
                    "Skills are required and must be an array".to_string(),
                ))
            }
        };

        let difficulty = required_text(body.difficulty)
            .ok_or_else(|| AppError::Validation("Difficulty is required".to_string()))?;
        let duration = required_text(body.duration)
            .ok_or_else(|| AppError::Validation("Duration is required".to_string()))?;

        Ok(GenerateRequest {
            skills,
            difficulty,
            duration,
        })
    }
}

fn required_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// POST /api/generate
///
/// Generates a practice project for the given skills, difficulty and duration.
pub async fn handle_generate_project(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequestBody>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let Json(body) = payload?;
    let request = GenerateRequest::try_from(body)?;

    let project = state.project_generator.generate(&request).await?;

    Ok(Json(project))
}
