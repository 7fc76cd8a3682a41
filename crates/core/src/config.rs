//! Shared configuration logic
//!
//! Handles loading of common environment variables.

use crate::error::ConfigError;
use std::env;

/// Common configuration used across services
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Database connection URL
    pub database_url: String,

    /// LINE Messaging API channel access token
    pub line_channel_access_token: String,

    /// Maximum database connections (default: 20)
    pub db_max_connections: u32,
}

impl CoreConfig {
    /// Load common configuration from environment variables
    ///
    /// This will also initialize dotenv if it hasn't been done yet.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            line_channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("LINE_CHANNEL_ACCESS_TOKEN".to_string()))?,
            db_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
        })
    }
}
