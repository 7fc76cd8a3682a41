//! Ticketline Worker - scheduled sale notifier
//!
//! Polls the sale event store on a fixed interval and broadcasts a
//! reminder for sales falling in the lookahead window.

mod config;
mod db;
mod processors;

pub use config::Config;
pub use db::WorkerDb;
pub use processors::{REMINDER_BANNER, notify_upcoming};

use anyhow::Result;
use line::LineClient;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Run the scheduled notifier loop
///
/// Fires `notify_upcoming` once per poll interval until cancelled. A
/// failed tick is logged and the loop continues; nothing is retried.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `line` - LINE client used for the broadcast
/// * `config` - Worker configuration
/// * `shutdown` - Optional cancellation token for graceful shutdown
pub async fn run_worker(
    pool: SqlitePool,
    line: LineClient,
    config: Config,
    shutdown: Option<CancellationToken>,
) -> Result<()> {
    let db = WorkerDb::new(pool);
    let poll_interval = tokio::time::Duration::from_secs(config.poll_interval_secs);

    info!(
        poll_interval_secs = config.poll_interval_secs,
        window = %config.window,
        "starting sale notifier"
    );

    loop {
        if let Some(ref token) = shutdown
            && token.is_cancelled()
        {
            info!("notifier received shutdown signal");
            break;
        }

        if let Err(e) = notify_upcoming(&db, &line, config.window).await {
            error!("sale reminder tick failed: {e:#}");
        }

        match shutdown {
            Some(ref token) => {
                tokio::select! {
                    () = tokio::time::sleep(poll_interval) => {}
                    () = token.cancelled() => {}
                }
            }
            None => tokio::time::sleep(poll_interval).await,
        }
    }

    Ok(())
}
