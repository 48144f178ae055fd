//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use validator::Validate;

use crate::application::services::LinkService;
use crate::domain::entities::Link;

/// Request body for `POST /api/links` and `PUT /api/links/{id}`.
///
/// Both fields default to an empty string when absent or `null` so that a
/// missing alias is reported as a validation error rather than a body rejection.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    /// Redirect target. No format validation beyond presence.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 2048, message = "original_url is limited to 2048 characters"))]
    pub original_url: String,

    /// Client-supplied alias, unique across all links.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(max = 50, message = "short_name is limited to 50 characters"))]
    pub short_name: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

impl LinkResponse {
    /// Builds the response, computing `short_url` from the service's base URL.
    pub fn from_link(link: Link, service: &LinkService) -> Self {
        let short_url = service.short_url(&link.short_name);
        Self {
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_name,
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: LinkRequest = serde_json::from_str("{}").unwrap();
        assert!(req.short_name.is_empty());
        assert!(req.original_url.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let req: LinkRequest =
            serde_json::from_str(r#"{"original_url": null, "short_name": null}"#).unwrap();
        assert!(req.short_name.is_empty());
        assert!(req.original_url.is_empty());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<LinkRequest>(r#"{"short_name": 5}"#).is_err());
    }

    #[test]
    fn test_length_limits() {
        let ok = LinkRequest {
            original_url: "u".repeat(2048),
            short_name: "s".repeat(50),
        };
        assert!(ok.validate().is_ok());

        let too_long = LinkRequest {
            original_url: "https://example.com".to_string(),
            short_name: "s".repeat(51),
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("short_name"));
    }
}
