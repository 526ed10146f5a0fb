// Test doubles shared by unit tests

use crate::core::config::{Config, DatabaseConfig, LoggingConfig, ServerConfig};
use crate::core::state::AppState;
use crate::models::user::User;
use crate::repository::{RepositoryError, UserRepository};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Repository that serves a fixed set of users and records every call.
pub struct RecordingRepository {
    users: Vec<User>,
    lookups: Mutex<Vec<i64>>,
    disconnects: AtomicUsize,
    fail_disconnect: bool,
}

impl RecordingRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            lookups: Mutex::new(Vec::new()),
            disconnects: AtomicUsize::new(0),
            fail_disconnect: false,
        }
    }

    pub fn empty() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    /// Ids passed to `find_by_id`, in call order
    pub fn lookups(&self) -> Vec<i64> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for RecordingRepository {
    async fn find_by_id(&self, id: i64) -> Vec<User> {
        self.lookups.lock().unwrap().push(id);
        self.users.iter().filter(|u| u.id == id).cloned().collect()
    }

    async fn disconnect(&self) -> Result<(), RepositoryError> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        if self.fail_disconnect {
            return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

pub fn sample_user(id: i64, name: &str) -> User {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    User {
        id,
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            port: 3000,
            num_threads: 2,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
            console: true,
        },
        database: DatabaseConfig::default(),
    }
}

pub fn create_test_state(repository: Arc<RecordingRepository>) -> Arc<AppState> {
    Arc::new(AppState::new(create_test_config(), repository))
}
