use crate::core::config::DatabaseSettings;
use crate::models::user::User;
use crate::repository::{RepositoryError, UserRepository};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

// Pool bounds are fixed for the lifetime of the process
const POOL_MAX_CONNECTIONS: u32 = 5;
const POOL_MIN_CONNECTIONS: u32 = 0;
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

const FIND_USER_BY_ID: &str =
    "SELECT id, name, email, created_at, updated_at FROM users WHERE id = ?";

/// `UserRepository` backed by a pooled MySQL connection.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the pool without opening a connection. The first lookup
    /// connects, so the service starts even when the store is down.
    pub fn connect_lazy(
        settings: &DatabaseSettings,
        log_statements: bool,
    ) -> Result<Self, RepositoryError> {
        let mut options = MySqlConnectOptions::from_str(&settings.url)
            .map_err(|e| RepositoryError::Configuration(e.to_string()))?;

        if !log_statements {
            options = options.disable_statement_logging();
        }

        let pool = MySqlPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .min_connections(POOL_MIN_CONNECTIONS)
            .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
            .idle_timeout(POOL_IDLE_TIMEOUT)
            .connect_lazy_with(options);

        info!(
            max_connections = POOL_MAX_CONNECTIONS,
            acquire_timeout_seconds = POOL_ACQUIRE_TIMEOUT.as_secs(),
            idle_timeout_seconds = POOL_IDLE_TIMEOUT.as_secs(),
            "MySQL pool created"
        );

        Ok(Self::new(pool))
    }

    /// Lookup that keeps store failures distinct from absence.
    pub async fn try_find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(FIND_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Vec<User> {
        match self.try_find_by_id(id).await {
            Ok(Some(user)) => vec![user],
            Ok(None) => {
                debug!(user_id = id, "User not found");
                Vec::new()
            }
            Err(e) => {
                error!(user_id = id, error = %e, "Error finding user by id");
                Vec::new()
            }
        }
    }

    async fn disconnect(&self) -> Result<(), RepositoryError> {
        self.pool.close().await;
        info!("MySQL pool closed");
        Ok(())
    }
}
