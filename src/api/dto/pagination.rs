//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::pagination::PageWindow;

/// Query string for `GET /api/links`.
///
/// `range` uses the list-UI convention `[start,end]`, e.g. `?range=[0,10]`.
/// An empty `range=` is treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub range: Option<String>,
}

impl RangeQuery {
    /// Resolves the window, falling back to `offset = 0, limit = 10` when
    /// `range` is absent or malformed.
    pub fn window(&self) -> PageWindow {
        PageWindow::from_range_or_default(self.range.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(range: Option<&str>) -> RangeQuery {
        RangeQuery {
            range: range.map(str::to_string),
        }
    }

    #[test]
    fn test_window_from_range() {
        let window = query(Some("[20,30]")).window();
        assert_eq!(window.offset, 20);
        assert_eq!(window.limit, Some(10));
    }

    #[test]
    fn test_window_defaults() {
        assert_eq!(query(None).window(), PageWindow::default());
        assert_eq!(query(Some("[oops")).window(), PageWindow::default());
    }

    #[test]
    fn test_empty_range_deserializes_as_none() {
        let q: RangeQuery = serde_json::from_str(r#"{"range": ""}"#).unwrap();
        assert!(q.range.is_none());

        let q: RangeQuery = serde_json::from_str("{}").unwrap();
        assert!(q.range.is_none());
    }
}
