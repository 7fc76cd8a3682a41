//! Ticketline Worker - scheduled notifier binary (standalone mode)
//!
//! Runs the reminder loop as its own process. For the unified binary,
//! see the server crate.

use anyhow::Result;
use line::LineClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    ticketline_shared::bootstrap::init_env();
    let _guard = ticketline_shared::bootstrap::init_tracing("worker");

    info!("Starting Ticketline notifier (standalone mode)");

    let config = worker::Config::from_env()?;
    let pool = ticketline_shared::bootstrap::init_db(&config.core).await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database migrations completed");

    let line = LineClient::new(config.core.line_channel_access_token.clone());

    // No shutdown token in standalone mode
    worker::run_worker(pool, line, config, None).await
}
