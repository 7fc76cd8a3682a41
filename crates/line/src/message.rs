//! Outbound message objects

use serde::{Deserialize, Serialize};

/// Outbound message object for the LINE Messaging API.
///
/// This system only ever sends text, but the tagged enum keeps call sites
/// stable if other message kinds are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text { text: String },
}

impl Message {
    /// Build a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_wire_shape() {
        let value = serde_json::to_value(Message::text("hello")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn test_text_message_round_trip() {
        let parsed: Message = serde_json::from_str(r#"{"type":"text","text":"こんにちは"}"#).unwrap();
        assert_eq!(parsed, Message::text("こんにちは"));
    }
}
