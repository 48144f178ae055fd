//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing links.
///
/// Enforces data-access semantics only. Business rules (required fields,
/// alias ownership on update) live in
/// [`crate::application::services::LinkService`]. Every operation is atomic
/// with respect to a single record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists links in ascending `id` order.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of leading records to skip
    /// - `limit` - Maximum number of records to return, `None` for no cap
    ///
    /// An offset past the end yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, offset: i64, limit: Option<i64>) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links, irrespective of any pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds a link by its alias (case-sensitive exact match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError>;

    /// Persists a new link, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store already holds the alias.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Overwrites the URL and alias of an existing link.
    ///
    /// Returns `Ok(None)` if no link has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another link already holds the alias.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, update: LinkUpdate) -> Result<Option<Link>, AppError>;

    /// Hard-deletes a link.
    ///
    /// Returns `Ok(true)` if the link existed and was removed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
