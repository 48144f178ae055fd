//! Pagination window and the `Content-Range` descriptor for list responses.

use std::fmt;

/// Page size used when the client does not supply a usable window.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Resource unit reported in the `Content-Range` header.
pub const RANGE_UNIT: &str = "links";

/// The `(offset, limit)` slice of the full record set to return.
///
/// `limit: None` means "everything from `offset` onward".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: Option<i64>,
}

impl PageWindow {
    /// Parses a `[start,end]` range as sent by list UIs.
    ///
    /// `offset = start` and `limit = end - start`. Returns `None` for anything
    /// that is not a JSON pair of integers with `0 <= start < end`.
    ///
    /// ```
    /// use link_shortener::domain::pagination::PageWindow;
    ///
    /// let window = PageWindow::from_range("[0,10]").unwrap();
    /// assert_eq!(window.offset, 0);
    /// assert_eq!(window.limit, Some(10));
    /// assert!(PageWindow::from_range("0-10").is_none());
    /// ```
    pub fn from_range(raw: &str) -> Option<Self> {
        let [start, end] = serde_json::from_str::<[i64; 2]>(raw).ok()?;

        if start < 0 || end <= start {
            return None;
        }

        Some(Self {
            offset: start,
            limit: Some(end - start),
        })
    }

    /// Like [`Self::from_range`], falling back to the default window.
    pub fn from_range_or_default(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_range).unwrap_or_default()
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Some(DEFAULT_PAGE_LIMIT),
        }
    }
}

/// Which slice of the collection a list response represents.
///
/// Rendered as `links {start}-{end}/{total}`. For an empty page `end` is
/// `start - 1` when the collection is empty and `start` otherwise, so
/// `links 0--1/0` and `links 20-20/10` are both valid outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    pub start: i64,
    pub end: i64,
    pub total: i64,
}

impl ContentRange {
    /// Builds the descriptor for a page of `returned` records starting at `offset`.
    pub fn new(offset: i64, returned: usize, total: i64) -> Self {
        let returned = i64::try_from(returned).unwrap_or(i64::MAX);

        let end = if returned > 0 {
            offset + returned - 1
        } else if total == 0 {
            offset - 1
        } else {
            offset
        };

        Self {
            start: offset,
            end,
            total,
        }
    }
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}/{}",
            RANGE_UNIT, self.start, self.end, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_range_basic() {
        let window = PageWindow::from_range("[0,10]").unwrap();
        assert_eq!(window, PageWindow { offset: 0, limit: Some(10) });
    }

    #[test]
    fn test_from_range_allows_whitespace() {
        let window = PageWindow::from_range("[ 20 , 30 ]").unwrap();
        assert_eq!(window, PageWindow { offset: 20, limit: Some(10) });
    }

    #[test]
    fn test_from_range_rejects_malformed() {
        assert!(PageWindow::from_range("").is_none());
        assert!(PageWindow::from_range("[0]").is_none());
        assert!(PageWindow::from_range("[0,10,20]").is_none());
        assert!(PageWindow::from_range("[a,b]").is_none());
        assert!(PageWindow::from_range("0,10").is_none());
    }

    #[test]
    fn test_from_range_rejects_inverted_or_negative() {
        assert!(PageWindow::from_range("[10,5]").is_none());
        assert!(PageWindow::from_range("[5,5]").is_none());
        assert!(PageWindow::from_range("[-1,5]").is_none());
    }

    #[test]
    fn test_default_window() {
        assert_eq!(
            PageWindow::from_range_or_default(None),
            PageWindow { offset: 0, limit: Some(10) }
        );
        assert_eq!(
            PageWindow::from_range_or_default(Some("garbage")),
            PageWindow::default()
        );
    }

    #[test]
    fn test_content_range_full_page() {
        assert_eq!(ContentRange::new(0, 10, 15).to_string(), "links 0-9/15");
    }

    #[test]
    fn test_content_range_partial_last_page() {
        assert_eq!(ContentRange::new(10, 5, 15).to_string(), "links 10-14/15");
    }

    #[test]
    fn test_content_range_out_of_window() {
        assert_eq!(ContentRange::new(20, 0, 10).to_string(), "links 20-20/10");
    }

    #[test]
    fn test_content_range_empty_collection() {
        assert_eq!(ContentRange::new(0, 0, 0).to_string(), "links 0--1/0");
    }
}
