// Job description generation: request validation, prompt rendering, handler.
// All provider calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod request;
