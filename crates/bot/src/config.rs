//! Bot configuration
//!
//! Loads configuration from environment variables

use std::env;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use anyhow::{Context, Result};
use ticketline_core::{ConfigError, CoreConfig, SaleWindow};

/// What to do with a text message that matches no keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Treat the text as a three-line event submission.
    Register,
    /// Echo the text back verbatim.
    Echo,
}

impl FromStr for Fallback {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "register" => Ok(Self::Register),
            "echo" => Ok(Self::Echo),
            other => Err(ConfigError::InvalidEnvVar(format!(
                "unknown fallback behavior: {other}"
            ))),
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "register"),
            Self::Echo => write!(f, "echo"),
        }
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Core configuration
    pub core: CoreConfig,

    /// Bind host (default: 0.0.0.0)
    pub host: String,

    /// Bind port (default: 3000)
    pub port: u16,

    /// Query window for the sales listing (default: same-day)
    pub sales_window: SaleWindow,

    /// Behavior for texts matching no keyword (default: register)
    pub fallback: Fallback,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        Ok(Self {
            core,
            host: env::var("BOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BOT_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("BOT_PORT must be a valid port number")?,
            sales_window: env::var("BOT_SALES_WINDOW")
                .unwrap_or_else(|_| "same-day".to_string())
                .parse()?,
            fallback: env::var("BOT_FALLBACK")
                .unwrap_or_else(|_| "register".to_string())
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
