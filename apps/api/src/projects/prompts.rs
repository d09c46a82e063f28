// All LLM prompt constants for the Projects module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for project generation.
/// Replace: {json_only_instruction}
pub const PROJECT_SYSTEM_TEMPLATE: &str = r#"You are a DevOps project generator. Create a detailed, practical DevOps project based on the provided skills, difficulty level, and duration.
The project should be realistic, educational, and help someone practice the specified skills.

Format your response as a JSON object with the following structure:
{
  "title": "Project title",
  "description": "Brief overview of the project",
  "skills": ["skill1", "skill2"],
  "difficulty": "beginner/intermediate/advanced",
  "duration": "estimated completion time",
  "objectives": ["objective1", "objective2"],
  "tasks": [
    {
      "title": "Task 1",
      "description": "Detailed description of task 1",
      "resources": ["resource1", "resource2"]
    }
  ],
  "deliverables": ["deliverable1", "deliverable2"],
  "learningOutcomes": ["outcome1", "outcome2"]
}

{json_only_instruction}"#;

/// User prompt for project generation.
pub fn project_prompt(skills: &[String], difficulty: &str, duration: &str) -> String {
    format!(
        "Generate a DevOps project with the following parameters:\n\
         - Skills/Job Requirements: {}\n\
         - Difficulty: {difficulty}\n\
         - Duration: {duration}",
        skills.join(", ")
    )
}
