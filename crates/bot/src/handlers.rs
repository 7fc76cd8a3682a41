//! Webhook event handlers
//!
//! One handler per inbound chat event, plus the diagnostic and health
//! endpoints. Fixed reply texts live here so the integration tests and
//! the handlers agree on them by construction.

use anyhow::{Context, Result};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::future::join_all;
use line::{Message, MessageContent, WebhookEvent, WebhookPayload};
use serde::Serialize;
use serde_json::json;
use ticketline_core::{SaleWindow, format_listing, now_tokyo};

use crate::AppState;
use crate::commands::{self, Intent};
use crate::config::Fallback;
use crate::event_parser::{self, ParseError};

/// Reply when the sales query returns no rows.
pub const NO_SALES_REPLY: &str = "本日のチケット発売はありません";

/// Reply to the add keyword: the three-line registration format.
pub const USAGE_REPLY: &str = "登録するイベントの情報を以下の形式で入力してください：\n\n[イベント名]\n[イベントURL]\n[発売日時]\n\n\n例:\nイベント名\nhttps://example.com/concert\n2024-04-01 22:00";

/// Reply when a submission is missing a field.
pub const INSUFFICIENT_INPUT_REPLY: &str = "入力が不足しています";

/// Reply when a submission's date-time has the wrong shape.
pub const DATE_FORMAT_REPLY: &str = "日付はYYYY-MM-DD HH:MMの形式で入力してください";

/// Reply after a successful registration.
pub const REGISTERED_REPLY: &str = "イベントを追加しました";

/// `POST /api/webhook` - dispatch one batch of inbound chat events.
///
/// Events are handled concurrently and independently; a failure in one
/// handler is logged and does not abort its siblings. The batch is always
/// acknowledged with `200 {"message":"success"}` once every handler has
/// settled. A body that does not deserialize is the one batch-level
/// failure, answered with `400 {"status":"error"}`.
pub async fn webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return (StatusCode::BAD_REQUEST, Json(json!({"status": "error"}))).into_response();
    };

    let results = join_all(
        payload
            .events
            .into_iter()
            .map(|event| handle_event(&state, event)),
    )
    .await;

    for err in results.into_iter().filter_map(Result::err) {
        tracing::error!("event handler failed: {err:#}");
    }

    Json(json!({"message": "success"})).into_response()
}

/// Handle one inbound chat event.
///
/// Non-message events and non-text contents are skipped silently.
async fn handle_event(state: &AppState, event: WebhookEvent) -> Result<()> {
    let WebhookEvent::Message {
        reply_token,
        message: MessageContent::Text { text },
    } = event
    else {
        return Ok(());
    };

    match commands::classify(&text) {
        Intent::SalesQuery => handle_sales_query(state, &reply_token).await,
        Intent::AddPrompt => reply(state, &reply_token, USAGE_REPLY.to_string()).await,
        Intent::Fallback => match state.fallback {
            Fallback::Register => handle_submission(state, &reply_token, &text).await,
            Fallback::Echo => reply(state, &reply_token, text).await,
        },
    }
}

/// Reply with the sale listing for the configured window.
///
/// A store failure propagates to the fan-out's capture point; the user
/// gets no reply in that case.
async fn handle_sales_query(state: &AppState, reply_token: &str) -> Result<()> {
    let (start, end) = state.window.bounds(now_tokyo());
    let events = state
        .db
        .sales_between(&start, &end)
        .await
        .context("sales query failed")?;

    tracing::debug!(count = events.len(), %start, %end, "sales query");

    let body = if events.is_empty() {
        NO_SALES_REPLY.to_string()
    } else {
        format_listing(&events)
    };

    reply(state, reply_token, body).await
}

/// Parse a submission and insert it, or reply with the corrective text.
async fn handle_submission(state: &AppState, reply_token: &str, text: &str) -> Result<()> {
    let submission = match event_parser::parse_submission(text) {
        Ok(submission) => submission,
        Err(err) => {
            let correction = match err {
                ParseError::MissingField => INSUFFICIENT_INPUT_REPLY,
                ParseError::InvalidDateTime(_) => DATE_FORMAT_REPLY,
            };
            return reply(state, reply_token, correction.to_string()).await;
        }
    };

    state
        .db
        .insert_sale(
            &submission.event_name,
            &submission.event_url,
            &submission.ticket_sales_date,
        )
        .await
        .context("sale insert failed")?;

    tracing::info!(
        event_name = %submission.event_name,
        ticket_sales_date = %submission.ticket_sales_date,
        "registered sale event"
    );

    reply(state, reply_token, REGISTERED_REPLY.to_string()).await
}

async fn reply(state: &AppState, reply_token: &str, text: String) -> Result<()> {
    state
        .line
        .reply(reply_token, &[Message::text(text)])
        .await
        .context("reply failed")?;
    Ok(())
}

/// `GET /test` - development diagnostic returning the same-day rows raw.
pub async fn todays_sales(State(state): State<AppState>) -> Response {
    let (start, end) = SaleWindow::SameDay.bounds(now_tokyo());
    match state.db.sales_between(&start, &end).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            tracing::error!("diagnostic sales query failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": err.to_string()})),
            )
                .into_response()
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// `GET /health` - returns 200 if the server and database are healthy.
pub async fn health(State(state): State<AppState>) -> Response {
    let db_status = match state.db.ping().await {
        Ok(()) => "healthy",
        Err(err) => {
            tracing::error!("database health check failed: {err}");
            "unhealthy"
        }
    };

    let response = HealthResponse {
        status: if db_status == "healthy" { "ok" } else { "degraded" }.to_string(),
        database: db_status.to_string(),
    };

    let status_code = if db_status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response)).into_response()
}
