mod common;

use affiliate_links::error::AppError;
use affiliate_links::utils::code_generator::is_valid_code;
use std::collections::HashSet;

#[tokio::test]
async fn test_create_link_generates_distinct_valid_codes() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let mut codes = HashSet::new();
    for i in 0..200 {
        let link = service
            .create_link(&format!("https://example.com/product/{i}"))
            .await
            .unwrap();

        assert!(is_valid_code(&link.short_code), "bad code {}", link.short_code);
        assert!(codes.insert(link.short_code));
    }

    assert_eq!(common::link_count(&pool).await, 200);
}

#[tokio::test]
async fn test_create_link_blank_url_creates_nothing() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    for input in ["", " ", "\n\t  "] {
        let result = service.create_link(input).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    assert_eq!(common::link_count(&pool).await, 0);
}

#[tokio::test]
async fn test_get_link_by_code_round_trip() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let created = service.create_link("https://example.com/product/123").await.unwrap();
    let found = service.get_link_by_code(&created.short_code).await.unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_get_link_by_code_never_issued() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let result = service.get_link_by_code("ZZZZZZ").await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_lookup_does_not_change_click_count() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let created = service.create_link("https://example.com").await.unwrap();

    for _ in 0..3 {
        let found = service.get_link_by_code(&created.short_code).await.unwrap();
        assert_eq!(found.click_count, 0);
    }
}

#[tokio::test]
async fn test_sequential_increments() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let link = service.create_link("https://example.com").await.unwrap();

    for _ in 0..10 {
        service.increment_click(link.id).await.unwrap();
    }

    let found = service.get_link_by_code(&link.short_code).await.unwrap();
    assert_eq!(found.click_count, 10);
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    let link = service.create_link("https://example.com").await.unwrap();
    let id = link.id;

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.increment_click(id).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let found = service.get_link_by_code(&link.short_code).await.unwrap();
    assert_eq!(found.click_count, 50);
}

#[tokio::test]
async fn test_increment_unknown_id_is_silent() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    assert!(service.increment_click(12_345).await.is_ok());
}

#[tokio::test]
async fn test_get_all_links_newest_first() {
    let pool = common::test_pool().await;
    let service = common::test_service(&pool);

    assert!(service.get_all_links().await.unwrap().is_empty());

    let first = service.create_link("https://example.com/1").await.unwrap();
    let second = service.create_link("https://example.com/2").await.unwrap();

    let links = service.get_all_links().await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, second.id);
    assert_eq!(links[1].id, first.id);
    assert!(links[0].created_at >= links[1].created_at);
}
