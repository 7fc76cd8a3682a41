//! Database operations for the notifier

use sqlx::SqlitePool;
use ticketline_core::SaleEvent;

/// Worker database handle
#[derive(Debug, Clone)]
pub struct WorkerDb {
    pool: SqlitePool,
}

impl WorkerDb {
    /// Create a new database handle
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch sale events in the half-open `[start, end)` window, bounds
    /// in canonical `YYYY-MM-DD HH:MM` form.
    pub async fn sales_between(&self, start: &str, end: &str) -> Result<Vec<SaleEvent>, sqlx::Error> {
        sqlx::query_as::<_, SaleEvent>(
            r#"
            SELECT event_name, event_url, ticket_sales_date
            FROM sales
            WHERE ticket_sales_date >= ?1
              AND ticket_sales_date < ?2
            ORDER BY ticket_sales_date, rowid
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
