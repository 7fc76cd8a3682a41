//! Ticketline Bot - webhook dispatcher binary (standalone mode)
//!
//! Runs the dispatcher as its own process. For the unified binary that
//! also runs the scheduled notifier, see the server crate.

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    ticketline_shared::bootstrap::init_env();
    let _guard = ticketline_shared::bootstrap::init_tracing("bot");

    info!("Starting Ticketline webhook dispatcher (standalone mode)");

    let config = bot::Config::from_env()?;
    let pool = ticketline_shared::bootstrap::init_db(&config.core).await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database migrations completed");

    bot::run_bot(pool, config).await
}
