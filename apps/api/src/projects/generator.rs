//! Project Generator — pluggable, trait-based backend that turns a skill list
//! into a structured practice project.
//!
//! Default: `LlmProjectGenerator` (OpenAI through `llm_client`).
//!
//! `AppState` holds an `Arc<dyn ProjectGenerator>`, chosen at startup.

use async_trait::async_trait;
use tracing::info;

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::projects::models::{GenerateRequest, Project};
use crate::projects::prompts::{project_prompt, PROJECT_SYSTEM_TEMPLATE};

/// The project generator trait. Implement this to swap backends without
/// touching the endpoint or handler code.
///
/// Failures are returned as-is; callers decide how to surface them.
#[async_trait]
pub trait ProjectGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Project, LlmError>;
}

/// Generates projects with a single JSON-mode chat completion.
pub struct LlmProjectGenerator(pub LlmClient);

#[async_trait]
impl ProjectGenerator for LlmProjectGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Project, LlmError> {
        let system = system_prompt();
        let prompt = project_prompt(&request.skills, &request.difficulty, &request.duration);

        let project: Project = self.0.call_json(&prompt, &system).await?;

        info!(
            "Generated project {:?} with {} tasks",
            project.title,
            project.tasks.len()
        );
        Ok(project)
    }
}

fn system_prompt() -> String {
    PROJECT_SYSTEM_TEMPLATE.replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            skills: vec!["Docker".to_string(), "Terraform".to_string()],
            difficulty: "beginner".to_string(),
            duration: "1 week".to_string(),
        }
    }

    #[test]
    fn test_system_prompt_includes_schema_and_json_instruction() {
        let system = system_prompt();
        assert!(system.contains("\"learningOutcomes\""));
        assert!(system.contains(JSON_ONLY_INSTRUCTION));
        assert!(!system.contains("{json_only_instruction}"));
    }

    #[test]
    fn test_user_prompt_lists_parameters() {
        let req = request();
        let prompt = project_prompt(&req.skills, &req.difficulty, &req.duration);
        assert!(prompt.contains("- Skills/Job Requirements: Docker, Terraform\n"));
        assert!(prompt.contains("- Difficulty: beginner\n"));
        assert!(prompt.ends_with("- Duration: 1 week"));
    }

    #[test]
    fn test_user_prompt_keeps_braces_verbatim() {
        let prompt = project_prompt(&["{duration}".to_string()], "hard", "3 days");
        assert!(prompt.contains("Requirements: {duration}\n"));
    }

    #[tokio::test]
    async fn test_llm_generator_without_key_propagates_error() {
        let llm = LlmClient::new(None, crate::llm_client::DEFAULT_OPENAI_BASE_URL).unwrap();
        let generator = LlmProjectGenerator(llm);
        let result = generator.generate(&request()).await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }
}
