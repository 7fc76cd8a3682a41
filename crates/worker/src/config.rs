//! Configuration for the notifier process
//!
//! Loads configuration from environment variables

use std::env;
use std::ops::Deref;

use anyhow::{Context, Result};
use ticketline_core::{CoreConfig, SaleWindow};

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Core configuration
    pub core: CoreConfig,

    /// Poll interval in seconds (default: 3600)
    pub poll_interval_secs: u64,

    /// Lookahead window for the reminder query (default: next-hour)
    pub window: SaleWindow,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        Ok(Self {
            core,
            poll_interval_secs: env::var("WORKER_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("WORKER_POLL_INTERVAL_SECS must be a valid integer")?,
            window: env::var("WORKER_WINDOW")
                .unwrap_or_else(|_| "next-hour".to_string())
                .parse()?,
        })
    }
}

impl Deref for Config {
    type Target = CoreConfig;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        unsafe {
            env::set_var("DATABASE_URL", "sqlite::memory:");
            env::set_var("LINE_CHANNEL_ACCESS_TOKEN", "test_token");
            env::remove_var("WORKER_POLL_INTERVAL_SECS");
            env::remove_var("WORKER_WINDOW");
        }

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.poll_interval_secs, 3600);
        assert_eq!(config.window, SaleWindow::NextHour);
        // Deref into the core config
        assert_eq!(config.database_url, "sqlite::memory:");

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LINE_CHANNEL_ACCESS_TOKEN");
        }
    }

    #[test]
    #[serial]
    fn test_config_overrides() {
        unsafe {
            env::set_var("DATABASE_URL", "sqlite::memory:");
            env::set_var("LINE_CHANNEL_ACCESS_TOKEN", "test_token");
            env::set_var("WORKER_POLL_INTERVAL_SECS", "60");
            env::set_var("WORKER_WINDOW", "same-day");
        }

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.window, SaleWindow::SameDay);

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LINE_CHANNEL_ACCESS_TOKEN");
            env::remove_var("WORKER_POLL_INTERVAL_SECS");
            env::remove_var("WORKER_WINDOW");
        }
    }
}
