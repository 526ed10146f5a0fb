use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Repository implementation to build at startup
    #[serde(default = "default_database_kind")]
    pub kind: String,
    /// Emit every SQL statement through the log
    #[serde(default)]
    pub log_statements: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: default_database_kind(),
            log_statements: false,
        }
    }
}

/// Connection settings for the user store, taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_database_kind() -> String {
    "mysql".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.database.kind.trim().is_empty() {
            bail!("database kind must not be empty");
        }

        Ok(())
    }
}

impl DatabaseSettings {
    /// Read connection settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` wins outright. Otherwise the URL is assembled from
    /// `DB_*` variables, falling back to `MYSQL_*` for credentials and
    /// database name. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = var("DATABASE_URL") {
            return Self { url };
        }

        let host = var("DB_HOST").unwrap_or_else(|| "mysql".to_string());
        let port = var("DB_PORT").unwrap_or_else(|| "3306".to_string());
        let user = var("DB_USER")
            .or_else(|| var("MYSQL_USER"))
            .unwrap_or_else(|| "root".to_string());
        let password = var("DB_PASSWORD")
            .or_else(|| var("MYSQL_PASSWORD"))
            .unwrap_or_default();
        let name = var("DB_NAME")
            .or_else(|| var("MYSQL_DATABASE"))
            .unwrap_or_else(|| "mydb".to_string());

        Self {
            url: format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, name),
        }
    }
}
