//! Ticketline Bot - webhook dispatcher for the LINE Messaging API
//!
//! Receives webhook event batches, classifies each text message by
//! keyword, and answers from the sale event store.

pub mod commands;
pub mod config;
pub mod db;
pub mod event_parser;
pub mod handlers;

pub use config::{Config, Fallback};
pub use db::BotDb;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use line::LineClient;
use sqlx::SqlitePool;
use ticketline_core::SaleWindow;
use tower_http::trace::TraceLayer;

/// Shared state for all request handlers.
///
/// Every field is a cheap clone; concurrent event handlers each take
/// their own copy and share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub db: BotDb,
    pub line: LineClient,
    pub window: SaleWindow,
    pub fallback: Fallback,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/webhook", post(handlers::webhook))
        .route("/test", get(handlers::todays_sales))
        .route("/health", get(handlers::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let user_agent = request
                        .headers()
                        .get(axum::http::header::USER_AGENT)
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        user_agent = %user_agent,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %response.status(),
                            "finished processing request"
                        );
                    },
                ),
        )
        .with_state(state)
}

/// Run the webhook dispatcher service
///
/// Binds the HTTP server and blocks until it exits. Shutdown is managed
/// by the caller (the unified binary cancels the surrounding task).
pub async fn run_bot(pool: SqlitePool, config: Config) -> Result<()> {
    let state = AppState {
        db: BotDb::new(pool),
        line: LineClient::new(config.core.line_channel_access_token.clone()),
        window: config.sales_window,
        fallback: config.fallback,
    };

    let app = create_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        window = %config.sales_window,
        fallback = %config.fallback,
        "webhook dispatcher listening on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
