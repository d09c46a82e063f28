use serde::{Deserialize, Serialize};

/// Validated input for project generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub skills: Vec<String>,
    pub difficulty: String,
    pub duration: String,
}

/// A practice project as returned by the model and passed through to the caller.
///
/// Every field defaults to empty so a partially filled model response still
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub difficulty: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub tasks: Vec<ProjectTask>,
    pub deliverables: Vec<String>,
    pub learning_outcomes: Vec<String>,
}

/// One step of a project, in the order the model listed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTask {
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
}
