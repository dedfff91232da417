//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::SchedulingConfig;
use crate::db::repository::HearingRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn HearingRepository>,
    /// Working windows and search defaults
    pub config: Arc<SchedulingConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and config.
    pub fn new(repository: Arc<dyn HearingRepository>, config: SchedulingConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
