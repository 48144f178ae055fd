//! Cross-origin policy for browser-based admin clients.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Builds the CORS layer from the configured origins.
///
/// - empty list: no cross-origin access
/// - `["*"]`: any origin
/// - otherwise: exactly the listed origins
///
/// `Content-Range` is always exposed; list UIs read the collection size from it.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn layer(origins: &[String]) -> Result<CorsLayer> {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_RANGE]);

    if origins.iter().any(|o| o == "*") {
        return Ok(base.allow_origin(Any));
    }

    let allowed = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{}'", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(base.allow_origin(AllowOrigin::list(allowed)))
}
