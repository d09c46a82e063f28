// Skill extraction: a static technology vocabulary and a two-pass matcher
// over free-text job descriptions. No LLM involvement.

pub mod extractor;
pub mod handlers;
pub mod vocabulary;
