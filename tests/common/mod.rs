#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use link_shortener::routes;
use link_shortener::state::AppState;

pub const TEST_BASE_URL: &str = "http://s.test";

/// State backed by a fresh in-memory repository; the repository handle is
/// returned for seeding.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repo.clone(), TEST_BASE_URL));

    (AppState::new(link_service), repo)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(LinkService::new(repo, TEST_BASE_URL)))
}

/// Test server over the full router and a repository to seed it.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(routes::router(state)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &dyn LinkRepository, short_name: &str, url: &str) -> Link {
    repo.create(NewLink {
        original_url: url.to_string(),
        short_name: short_name.to_string(),
    })
    .await
    .unwrap()
}

/// Seeds `count` links aliased `l0`, `l1`, ...
pub async fn create_test_links(repo: &dyn LinkRepository, count: usize) -> Vec<Link> {
    let mut links = Vec::with_capacity(count);
    for i in 0..count {
        let link = create_test_link(
            repo,
            &format!("l{}", i),
            &format!("https://example.com/{}", i),
        )
        .await;
        links.push(link);
    }
    links
}
