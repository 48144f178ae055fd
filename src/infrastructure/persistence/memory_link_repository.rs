//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug)]
struct Inner {
    links: BTreeMap<i64, Link>,
    next_id: i64,
}

impl Inner {
    fn alias_owner(&self, short_name: &str) -> Option<i64> {
        self.links
            .values()
            .find(|l| l.short_name == short_name)
            .map(|l| l.id)
    }
}

/// Link repository held entirely in memory.
///
/// Mirrors the PostgreSQL contract: ids come from a counter that only grows,
/// listing is in id order, and the alias uniqueness check and the write share
/// one write lock, so a duplicate alias is rejected with
/// [`AppError::Conflict`] exactly as the database constraint would.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                links: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn list(&self, offset: i64, limit: Option<i64>) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;

        let skip = usize::try_from(offset).unwrap_or(0);
        let take = limit
            .map(|l| usize::try_from(l).unwrap_or(0))
            .unwrap_or(usize::MAX);

        Ok(inner.links.values().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.len() as i64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.get(&id).cloned())
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .links
            .values()
            .find(|l| l.short_name == short_name)
            .cloned())
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.alias_owner(&new_link.short_name).is_some() {
            return Err(AppError::short_name_taken(&new_link.short_name));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let link = Link::new(id, new_link.original_url, new_link.short_name, Utc::now());
        inner.links.insert(id, link.clone());

        Ok(link)
    }

    async fn update(&self, id: i64, update: LinkUpdate) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        if !inner.links.contains_key(&id) {
            return Ok(None);
        }

        if inner
            .alias_owner(&update.short_name)
            .is_some_and(|owner| owner != id)
        {
            return Err(AppError::short_name_taken(&update.short_name));
        }

        let Some(link) = inner.links.get_mut(&id) else {
            return Ok(None);
        };
        link.original_url = update.original_url;
        link.short_name = update.short_name;

        Ok(Some(link.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.links.remove(&id).is_some())
    }
}
