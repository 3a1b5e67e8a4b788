#![allow(dead_code)]

use affiliate_links::application::services::LinkService;
use affiliate_links::domain::click_event::ClickEvent;
use affiliate_links::infrastructure::database;
use affiliate_links::infrastructure::persistence::SqliteLinkRepository;
use affiliate_links::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fresh in-memory database with migrations applied.
///
/// A single long-lived connection keeps the in-memory database alive for the
/// whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    database::migrate(&pool).await.unwrap();
    pool
}

pub fn test_repository(pool: &SqlitePool) -> Arc<SqliteLinkRepository> {
    Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())))
}

pub fn test_service(pool: &SqlitePool) -> Arc<LinkService<SqliteLinkRepository>> {
    Arc::new(LinkService::new(test_repository(pool)))
}

/// Inserts a link row directly, bypassing code generation.
pub async fn insert_link(pool: &SqlitePool, code: &str, url: &str, created_at: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_code, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: &SqlitePool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(test_service(pool), tx);

    (state, rx)
}
