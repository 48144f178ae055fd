//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// Maximum length of a stored destination URL, in characters.
pub const MAX_ORIGINAL_URL_LEN: usize = 2048;

/// Maximum length of an alias, in characters.
pub const MAX_SHORT_NAME_LEN: usize = 50;

/// A stored mapping from an alias to its destination URL.
///
/// `id` and `created_at` are assigned by the store and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_name,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_name: String,
}

/// Replacement values for an existing link.
///
/// Both fields overwrite the stored values; `id` and `created_at` are untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub original_url: String,
    pub short_name: String,
}
