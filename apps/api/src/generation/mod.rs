// AI-assisted blog content pipeline:
// prompt build → model call → field extraction → slug/image derivation →
// idempotent persistence. All LLM calls go through llm_client.

pub mod categories;
pub mod extract;
pub mod generator;
pub mod images;
pub mod prompts;
pub mod read_time;
pub mod slug;
