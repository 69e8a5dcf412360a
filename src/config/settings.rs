//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first.
    ///
    /// Bind address is not part of this struct; `serve` reads `SERVER_HOST`
    /// and `SERVER_PORT` through its own arguments.
    ///
    /// Unset or unparsable values fall back to the defaults in
    /// [`constants`](super::constants).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
        }
    }
}
