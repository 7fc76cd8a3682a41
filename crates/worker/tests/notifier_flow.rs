//! Integration tests for the scheduled notifier
//!
//! httpmock stands in for the LINE Messaging API; each test gets a
//! fresh migrated SQLite pool.

use chrono::Duration;
use httpmock::Method::POST;
use httpmock::MockServer;
use line::LineClient;
use serde_json::json;
use sqlx::SqlitePool;
use ticketline_core::{
    LISTING_SEPARATOR, SaleWindow, format_sales_datetime, now_tokyo,
};
use worker::{REMINDER_BANNER, WorkerDb, notify_upcoming};

async fn insert_sale(pool: &SqlitePool, name: &str, url: &str, date: &str) {
    sqlx::query("INSERT INTO sales (event_name, event_url, ticket_sales_date) VALUES (?1, ?2, ?3)")
        .bind(name)
        .bind(url)
        .bind(date)
        .execute(pool)
        .await
        .expect("insert");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_broadcast_contains_banner_and_joined_rows(pool: SqlitePool) {
    let soon = format_sales_datetime(now_tokyo() + Duration::minutes(5));
    let later = format_sales_datetime(now_tokyo() + Duration::minutes(30));

    insert_sale(&pool, "コンサート", "https://example.com/concert", &soon).await;
    insert_sale(&pool, "ライブ", "https://example.com/live", &later).await;
    // Far outside the lookahead window.
    insert_sale(&pool, "来年の公演", "https://example.com/next-year", "2099-01-01 10:00").await;

    let expected = format!(
        "{REMINDER_BANNER}コンサート {soon}\nhttps://example.com/concert{LISTING_SEPARATOR}ライブ {later}\nhttps://example.com/live"
    );

    let server = MockServer::start_async().await;
    let broadcast = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/broadcast")
                .header("authorization", "Bearer test-token")
                .json_body(json!({
                    "messages": [{"type": "text", "text": expected}],
                }));
            then.status(200);
        })
        .await;

    let db = WorkerDb::new(pool);
    let line = LineClient::with_base_url("test-token", server.base_url());

    notify_upcoming(&db, &line, SaleWindow::NextHour)
        .await
        .expect("notify");

    broadcast.assert_async().await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_empty_window_broadcasts_nothing(pool: SqlitePool) {
    insert_sale(&pool, "来年の公演", "https://example.com/next-year", "2099-01-01 10:00").await;

    let server = MockServer::start_async().await;
    let any_call = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let db = WorkerDb::new(pool);
    let line = LineClient::with_base_url("test-token", server.base_url());

    notify_upcoming(&db, &line, SaleWindow::NextHour)
        .await
        .expect("notify");

    assert_eq!(any_call.hits_async().await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_same_day_window_variant(pool: SqlitePool) {
    // Start of the current local day is always inside the same-day window.
    let (start_of_day, _) = SaleWindow::SameDay.bounds(now_tokyo());

    insert_sale(&pool, "早朝ライブ", "https://example.com/morning", &start_of_day).await;
    insert_sale(&pool, "来年の公演", "https://example.com/next-year", "2099-01-01 10:00").await;

    let expected = format!("{REMINDER_BANNER}早朝ライブ {start_of_day}\nhttps://example.com/morning");

    let server = MockServer::start_async().await;
    let broadcast = server
        .mock_async(|when, then| {
            when.method(POST).path("/broadcast").json_body(json!({
                "messages": [{"type": "text", "text": expected}],
            }));
            then.status(200);
        })
        .await;

    let db = WorkerDb::new(pool);
    let line = LineClient::with_base_url("test-token", server.base_url());

    notify_upcoming(&db, &line, SaleWindow::SameDay)
        .await
        .expect("notify");

    broadcast.assert_async().await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_store_failure_surfaces_as_error(pool: SqlitePool) {
    sqlx::query("DROP TABLE sales")
        .execute(&pool)
        .await
        .expect("drop");

    let server = MockServer::start_async().await;
    let db = WorkerDb::new(pool);
    let line = LineClient::with_base_url("test-token", server.base_url());

    let result = notify_upcoming(&db, &line, SaleWindow::NextHour).await;
    assert!(result.is_err());
}
