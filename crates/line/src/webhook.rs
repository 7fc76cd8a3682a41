//! Inbound webhook payload types
//!
//! Only the fields this system reads are modeled; everything else in the
//! platform payload is ignored by deserialization. Unknown event and
//! message types map to `Other` so new platform features never break the
//! endpoint.

use serde::Deserialize;

/// Body of an inbound webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One inbound chat event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookEvent {
    Message {
        #[serde(rename = "replyToken")]
        reply_token: String,
        message: MessageContent,
    },
    #[serde(other)]
    Other,
}

/// Content of a message event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}
