mod common;

use affiliate_links::api::dto::links::{CreateLinkResponse, LinkResponse};
use affiliate_links::domain::click_worker::run_click_worker;
use affiliate_links::routes::build_router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(&pool);
    let server = TestServer::new(build_router(state)).unwrap();

    common::insert_link(&pool, "redir1", "https://example.com/target", "2025-01-01T00:00:00.000Z").await;

    let response = server.get("/a/redir1").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(&pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/a/nope00").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(&pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/a/too-long-code").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_queues_click() {
    let pool = common::test_pool().await;
    let (state, mut rx) = common::create_test_state(&pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let id = common::insert_link(&pool, "clickm", "https://example.com", "2025-01-01T00:00:00.000Z").await;

    let response = server.get("/a/clickm").await;
    assert_eq!(response.status_code(), 307);

    let event = rx.try_recv().unwrap();
    assert_eq!(event.link_id, id);
    assert_eq!(event.short_code, "clickm");
}

#[tokio::test]
async fn test_redirect_succeeds_when_click_queue_closed() {
    let pool = common::test_pool().await;
    let (state, rx) = common::create_test_state(&pool);
    drop(rx);
    let server = TestServer::new(build_router(state)).unwrap();

    common::insert_link(&pool, "closed", "https://example.com/still", "2025-01-01T00:00:00.000Z").await;

    let response = server.get("/a/closed").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/still");
    assert_eq!(common::click_count(&pool, "closed").await, 0);
}

#[tokio::test]
async fn test_create_redirect_list_scenario() {
    let pool = common::test_pool().await;
    let (state, rx) = common::create_test_state(&pool);
    tokio::spawn(run_click_worker(rx, state.link_service.clone(), 2));
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "original_url": "https://example.com/product/123" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: CreateLinkResponse = response.json();
    let code = created.short_url.strip_prefix("/a/").unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let response = server.get(&created.short_url).await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/product/123");

    let mut links: Vec<LinkResponse> = Vec::new();
    for _ in 0..100 {
        links = server.get("/links").await.json();
        if links.first().is_some_and(|l| l.click_count == 1) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, created.id);
    assert_eq!(links[0].short_code, code);
    assert_eq!(links[0].click_count, 1);
}
