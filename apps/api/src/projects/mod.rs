// Project generation: request validation, prompt building and the pluggable
// generator backend. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
