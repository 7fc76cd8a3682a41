//! Minimal outbound client for the LINE Messaging API

use serde::Serialize;

use crate::error::LineError;
use crate::message::Message;

const DEFAULT_BASE_URL: &str = "https://api.line.me/v2/bot/message";

/// Handle to the LINE Messaging API message endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool
/// across clones.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

#[derive(Serialize)]
struct ReplyBody<'a> {
    #[serde(rename = "replyToken")]
    reply_token: &'a str,
    messages: &'a [Message],
}

#[derive(Serialize)]
struct PushBody<'a> {
    to: &'a str,
    messages: &'a [Message],
}

#[derive(Serialize)]
struct BroadcastBody<'a> {
    messages: &'a [Message],
}

impl LineClient {
    /// Create a client against the production API.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Respond to one inbound conversation turn.
    pub async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), LineError> {
        self.post(
            "reply",
            &ReplyBody {
                reply_token,
                messages,
            },
        )
        .await
    }

    /// Send to one specific user.
    pub async fn push(&self, user_id: &str, messages: &[Message]) -> Result<(), LineError> {
        self.post(
            "push",
            &PushBody {
                to: user_id,
                messages,
            },
        )
        .await
    }

    /// Send to every subscriber of the channel.
    pub async fn broadcast(&self, messages: &[Message]) -> Result<(), LineError> {
        self.post("broadcast", &BroadcastBody { messages }).await
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), LineError> {
        tracing::debug!(endpoint, "sending LINE message");
        // The response status is not inspected. Delivery is
        // fire-and-forget; only transport failures surface.
        self.http
            .post(format!("{}/{}", self.base_url, endpoint))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;
        Ok(())
    }
}
