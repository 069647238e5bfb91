use std::sync::Arc;

use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation provider. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn CompletionProvider>,
}
