use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Ephemeral session storage. The pipeline never touches this directly;
    /// only the boundary handlers read and write sessions.
    pub sessions: Arc<dyn SessionStore>,
    pub config: Config,
}
