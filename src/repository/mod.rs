//! User persistence port.
//!
//! Handlers depend only on [`UserRepository`]; the concrete store is picked
//! once at startup by [`build_repository`] and injected through the router
//! state.

pub mod mysql;

use crate::core::config::{DatabaseConfig, DatabaseSettings};
use crate::models::user::User;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

pub use mysql::MySqlUserRepository;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Invalid database configuration: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to users plus release of the underlying resource.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by primary key.
    ///
    /// Yields zero or one users. Store failures are logged and reported as an
    /// empty result, so callers cannot tell "absent" from "lookup failed".
    async fn find_by_id(&self, id: i64) -> Vec<User>;

    /// Release the store connection. Calling it twice is not supported.
    async fn disconnect(&self) -> Result<(), RepositoryError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepositoryKind {
    MySql,
}

impl RepositoryKind {
    /// Resolve a configured repository name. Unknown names fall back to MySQL.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" | "sequelize" => RepositoryKind::MySql,
            other => {
                warn!(kind = %other, "Unknown repository kind, falling back to mysql");
                RepositoryKind::MySql
            }
        }
    }
}

/// Build the repository selected by `config.kind`.
pub fn build_repository(
    config: &DatabaseConfig,
    settings: &DatabaseSettings,
) -> Result<Arc<dyn UserRepository>, RepositoryError> {
    match RepositoryKind::from_name(&config.kind) {
        RepositoryKind::MySql => {
            let repository = MySqlUserRepository::connect_lazy(settings, config.log_statements)?;
            Ok(Arc::new(repository))
        }
    }
}
