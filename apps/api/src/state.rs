use std::sync::Arc;

use crate::config::Config;
use crate::parser_client::ParserClient;
use crate::session::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// All live browser-tab sessions. In-memory only; a restart drops them.
    pub sessions: Arc<SessionRegistry>,
    /// Client for the external resume-parsing service.
    pub parser: ParserClient,
    pub config: Config,
}
