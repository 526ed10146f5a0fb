// Application state (AppState)

use crate::core::config::Config;
use crate::repository::UserRepository;
use std::sync::Arc;

/// Shared application state
///
/// The repository handle is created once at startup and injected here, so
/// handlers never reach for a process-wide connection.
#[derive(Clone)]
pub struct AppState {
    /// User store
    pub users: Arc<dyn UserRepository>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            config: Arc::new(config),
        }
    }
}
