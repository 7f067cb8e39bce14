use crate::config::Config;
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless; cloned per request for the blocking parse task.
    pub parser: ResumeParser,
}
