//! Reminder broadcast for upcoming ticket sales

use anyhow::{Context, Result};
use line::{LineClient, Message};
use ticketline_core::{SaleWindow, format_listing, now_tokyo};
use tracing::{debug, info};

use crate::db::WorkerDb;

/// Banner placed before the listing in the reminder broadcast.
pub const REMINDER_BANNER: &str = "1時間以内にチケ発！！！\n";

/// One notifier trigger: query the lookahead window and broadcast.
///
/// An empty window is not an error; nothing is sent.
pub async fn notify_upcoming(db: &WorkerDb, line: &LineClient, window: SaleWindow) -> Result<()> {
    let (start, end) = window.bounds(now_tokyo());
    let events = db
        .sales_between(&start, &end)
        .await
        .context("lookahead query failed")?;

    if events.is_empty() {
        debug!(%start, %end, "no upcoming sales, skipping broadcast");
        return Ok(());
    }

    let body = format!("{REMINDER_BANNER}{}", format_listing(&events));
    line.broadcast(&[Message::text(body)])
        .await
        .context("reminder broadcast failed")?;

    info!(count = events.len(), %start, %end, "broadcast sale reminder");

    Ok(())
}
