//! Link management and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{
    Link, LinkUpdate, MAX_ORIGINAL_URL_LEN, MAX_SHORT_NAME_LEN, NewLink,
};
use crate::domain::pagination::{ContentRange, PageWindow};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{debug, info};

/// Path segment under which redirects are served.
pub const REDIRECT_PREFIX: &str = "r";

/// One page of links together with its `Content-Range` descriptor.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub range: ContentRange,
}

/// Service for managing links and resolving aliases.
///
/// Checks run in a fixed order: input shape, then existence, then alias
/// uniqueness, then the write. The uniqueness lookup is only an early exit;
/// the repository's own constraint is authoritative and a late violation is
/// surfaced as the same [`AppError::Conflict`].
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every computed short URL; a trailing `/` is ignored.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Returns a page of links and the range it covers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self, window: PageWindow) -> Result<LinkPage, AppError> {
        let links = self.repository.list(window.offset, window.limit).await?;
        let total = self.repository.count().await?;

        let range = ContentRange::new(window.offset, links.len(), total);
        debug!(%range, "Listed links");

        Ok(LinkPage { links, range })
    }

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::link_not_found(id))
    }

    /// Creates a link under a client-supplied alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_name` or `original_url` is
    /// empty or too long.
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    pub async fn create_link(
        &self,
        original_url: String,
        short_name: String,
    ) -> Result<Link, AppError> {
        validate_fields(&original_url, &short_name)?;

        if self
            .repository
            .find_by_short_name(&short_name)
            .await?
            .is_some()
        {
            return Err(AppError::short_name_taken(&short_name));
        }

        let link = self
            .repository
            .create(NewLink {
                original_url,
                short_name,
            })
            .await?;

        info!(id = link.id, short_name = %link.short_name, "Link created");
        Ok(link)
    }

    /// Replaces the URL and alias of an existing link.
    ///
    /// Keeping the link's own alias is not a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on empty or oversized fields.
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Conflict`] if another link holds the alias.
    pub async fn update_link(
        &self,
        id: i64,
        original_url: String,
        short_name: String,
    ) -> Result<Link, AppError> {
        validate_fields(&original_url, &short_name)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::link_not_found(id));
        }

        if let Some(owner) = self.repository.find_by_short_name(&short_name).await?
            && owner.id != id
        {
            return Err(AppError::short_name_taken(&short_name));
        }

        let link = self
            .repository
            .update(
                id,
                LinkUpdate {
                    original_url,
                    short_name,
                },
            )
            .await?
            // Deleted between the existence check and the write.
            .ok_or_else(|| AppError::link_not_found(id))?;

        info!(id, short_name = %link.short_name, "Link updated");
        Ok(link)
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::link_not_found(id));
        }

        info!(id, "Link deleted");
        Ok(())
    }

    /// Resolves an alias to its link for redirecting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this alias.
    pub async fn resolve(&self, short_name: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_short_name(short_name)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Short link '{}' not found", short_name),
                    json!({ "short_name": short_name }),
                )
            })?;

        debug!(short_name, target = %link.original_url, "Resolved alias");
        Ok(link)
    }

    /// Constructs the public short URL for an alias.
    pub fn short_url(&self, short_name: &str) -> String {
        format!("{}/{}/{}", self.base_url, REDIRECT_PREFIX, short_name)
    }
}

/// Required-field and length checks shared by create and update.
fn validate_fields(original_url: &str, short_name: &str) -> Result<(), AppError> {
    if short_name.is_empty() {
        return Err(AppError::bad_request(
            "Field 'short_name' is required",
            json!({ "field": "short_name" }),
        ));
    }

    if original_url.is_empty() {
        return Err(AppError::bad_request(
            "Field 'original_url' is required",
            json!({ "field": "original_url" }),
        ));
    }

    if short_name.chars().count() > MAX_SHORT_NAME_LEN {
        return Err(AppError::bad_request(
            format!("Field 'short_name' must be at most {MAX_SHORT_NAME_LEN} characters"),
            json!({ "field": "short_name", "max": MAX_SHORT_NAME_LEN }),
        ));
    }

    if original_url.chars().count() > MAX_ORIGINAL_URL_LEN {
        return Err(AppError::bad_request(
            format!("Field 'original_url' must be at most {MAX_ORIGINAL_URL_LEN} characters"),
            json!({ "field": "original_url", "max": MAX_ORIGINAL_URL_LEN }),
        ));
    }

    // Served back verbatim as the redirect `Location` header.
    if original_url.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "Field 'original_url' must not contain control characters",
            json!({ "field": "original_url" }),
        ));
    }

    Ok(())
}
