//! PostgreSQL repository tests.
//!
//! Each test gets a fresh database with migrations applied; `DATABASE_URL`
//! must point at a server the user may create databases on.

mod common;

use axum_test::TestServer;
use link_shortener::domain::entities::{LinkUpdate, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::routes;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(short_name: &str, url: &str) -> NewLink {
    NewLink {
        original_url: url.to_string(),
        short_name: short_name.to_string(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("docs", "https://example.com/docs")).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert_eq!(link.short_name, "docs");
    assert_eq!(link.original_url, "https://example.com/docs");
    assert!(link.id > 0);
}

#[sqlx::test]
async fn test_create_duplicate_short_name_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("docs", "https://example.com/a"))
        .await
        .unwrap();

    let result = repo.create(new_link("docs", "https://example.com/b")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_find_by_short_name(pool: PgPool) {
    sqlx::query("INSERT INTO links (original_url, short_name) VALUES ($1, $2)")
        .bind("https://example.com")
        .bind("abc123")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_short_name("abc123").await.unwrap();
    assert_eq!(link.unwrap().original_url, "https://example.com");

    // Alias matching is exact.
    assert!(repo.find_by_short_name("ABC123").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_id(404).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_window_and_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    for i in 0..15 {
        repo.create(new_link(&format!("l{}", i), "https://example.com"))
            .await
            .unwrap();
    }

    let page = repo.list(10, Some(10)).await.unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].short_name, "l10");

    let all = repo.list(0, None).await.unwrap();
    assert_eq!(all.len(), 15);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    assert_eq!(repo.count().await.unwrap(), 15);
}

#[sqlx::test]
async fn test_update_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo
        .create(new_link("docs", "https://old.example.com"))
        .await
        .unwrap();

    let updated = repo
        .update(
            link.id,
            LinkUpdate {
                original_url: "https://new.example.com".to_string(),
                short_name: "manual".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, link.id);
    assert_eq!(updated.short_name, "manual");
    assert_eq!(updated.created_at, link.created_at);
}

#[sqlx::test]
async fn test_update_to_taken_short_name_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("docs", "https://example.com/docs"))
        .await
        .unwrap();
    let blog = repo
        .create(new_link("blog", "https://example.com/blog"))
        .await
        .unwrap();

    let result = repo
        .update(
            blog.id,
            LinkUpdate {
                original_url: blog.original_url.clone(),
                short_name: "docs".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo
        .update(
            7,
            LinkUpdate {
                original_url: "https://example.com".to_string(),
                short_name: "docs".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo
        .create(new_link("docs", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.delete(link.id).await.unwrap());
    assert!(!repo.delete(link.id).await.unwrap());
    assert!(repo.find_by_id(link.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_api_against_postgres(pool: PgPool) {
    let server = TestServer::new(routes::router(common::create_pg_state(pool))).unwrap();

    server
        .post("/api/links")
        .json(&json!({ "original_url": "https://example.com/docs", "short_name": "docs" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let duplicate = server
        .post("/api/links")
        .json(&json!({ "original_url": "https://example.com/other", "short_name": "docs" }))
        .await;
    duplicate.assert_status_bad_request();

    let response = server
        .get("/api/links")
        .add_query_param("range", "[0,10]")
        .await;
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_RANGE)
            .unwrap(),
        "links 0-0/1"
    );
}
