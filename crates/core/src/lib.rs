//! Ticketline Core - Domain logic and models
//!
//! This crate contains pure domain logic with no I/O operations.
//! The sale event model, the canonical sale date-time format, and the
//! query window policy are defined here.

pub mod config;
pub mod datetime;
pub mod error;
pub mod models;

pub use config::CoreConfig;
pub use datetime::{SaleWindow, format_sales_datetime, is_sales_datetime, now_tokyo};
pub use error::ConfigError;
pub use models::{LISTING_SEPARATOR, SaleEvent, format_listing};
