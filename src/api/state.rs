//! Application state for the API server

use crate::{Config, DownloadOrchestrator};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the orchestrator instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The download orchestrator driving the external engine
    pub orchestrator: Arc<DownloadOrchestrator>,

    /// Configuration (storage directory, tool paths, API settings)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(orchestrator: Arc<DownloadOrchestrator>, config: Arc<Config>) -> Self {
        Self {
            orchestrator,
            config,
        }
    }
}
