//! Database operations for the webhook dispatcher

use sqlx::SqlitePool;
use ticketline_core::SaleEvent;

/// Bot database handle
#[derive(Debug, Clone)]
pub struct BotDb {
    pool: SqlitePool,
}

impl BotDb {
    /// Create a new database handle
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch sale events whose date falls in the half-open `[start, end)`
    /// window. Bounds are canonical `YYYY-MM-DD HH:MM` strings, so plain
    /// text comparison is a correct date comparison.
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

    /// Insert one sale event.
    pub async fn insert_sale(&self, name: &str, url: &str, date: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO sales (event_name, event_url, ticket_sales_date)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(name)
        .bind(url)
        .bind(date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Liveness probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_insert_and_query_window(pool: SqlitePool) {
        let db = BotDb::new(pool);

        db.insert_sale("concert", "https://example.com/concert", "2024-04-01 22:00")
            .await
            .expect("insert");
        db.insert_sale("live", "https://example.com/live", "2024-04-02 10:00")
            .await
            .expect("insert");

        let rows = db
            .sales_between("2024-04-01 00:00", "2024-04-02 00:00")
            .await
            .expect("query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event_name, "concert");
        assert_eq!(rows[0].ticket_sales_date, "2024-04-01 22:00");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_window_is_half_open(pool: SqlitePool) {
        let db = BotDb::new(pool);

        db.insert_sale("at-start", "https://example.com/a", "2024-04-01 00:00")
            .await
            .expect("insert");
        db.insert_sale("at-end", "https://example.com/b", "2024-04-02 00:00")
            .await
            .expect("insert");

        let rows = db
            .sales_between("2024-04-01 00:00", "2024-04-02 00:00")
            .await
            .expect("query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event_name, "at-start");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_rows_ordered_by_date_then_insertion(pool: SqlitePool) {
        let db = BotDb::new(pool);

        db.insert_sale("later", "https://example.com/later", "2024-04-01 22:00")
            .await
            .expect("insert");
        db.insert_sale("earlier", "https://example.com/earlier", "2024-04-01 10:00")
            .await
            .expect("insert");
        db.insert_sale("same-time", "https://example.com/same", "2024-04-01 10:00")
            .await
            .expect("insert");

        let rows = db
            .sales_between("2024-04-01 00:00", "2024-04-02 00:00")
            .await
            .expect("query");
        let names: Vec<_> = rows.iter().map(|r| r.event_name.as_str()).collect();
        assert_eq!(names, ["earlier", "same-time", "later"]);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_empty_name_violates_schema_check(pool: SqlitePool) {
        let db = BotDb::new(pool);

        let result = db.insert_sale("", "https://example.com/x", "2024-04-01 10:00").await;
        assert!(result.is_err());
    }
}
