//! LINE Messaging API wire layer
//!
//! Inbound webhook payload types and a minimal outbound client. This is
//! the only crate that speaks HTTP to the LINE platform; it never touches
//! the database.

pub mod client;
pub mod error;
pub mod message;
pub mod webhook;

pub use client::LineClient;
pub use error::LineError;
pub use message::Message;
pub use webhook::{MessageContent, WebhookEvent, WebhookPayload};
