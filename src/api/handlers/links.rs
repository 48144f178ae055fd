//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{LinkRequest, LinkResponse};
use crate::api::dto::pagination::RangeQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links for the requested window.
///
/// # Endpoint
///
/// `GET /api/links?range=[start,end]`
///
/// # Response
///
/// A JSON array of links plus a `Content-Range` header describing the slice:
///
/// ```text
/// Content-Range: links 0-9/15
/// ```
///
/// A missing or malformed `range` falls back to the first 10 links.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<(HeaderMap, Json<Vec<LinkResponse>>), AppError> {
    let page = state.link_service.list_links(query.window()).await?;

    let mut headers = HeaderMap::new();
    let range = HeaderValue::from_str(&page.range.to_string()).map_err(|e| {
        AppError::internal("Invalid Content-Range", json!({ "reason": e.to_string() }))
    })?;
    headers.insert(header::CONTENT_RANGE, range);

    let items = page
        .links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.link_service))
        .collect();

    Ok((headers, Json(items)))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;
    Ok(Json(LinkResponse::from_link(link, &state.link_service)))
}

/// Creates a link under a client-supplied alias.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/docs", "short_name": "docs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object of strings,
/// `short_name` is missing, empty or `null`, a field is too long, or the alias
/// already exists.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.original_url, payload.short_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.link_service)),
    ))
}

/// Replaces the URL and alias of a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// Re-submitting the link's current alias is allowed.
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
/// Returns 400 Bad Request if validation fails or another link holds the alias.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .update_link(id, payload.original_url, payload.short_name)
        .await?;

    Ok(Json(LinkResponse::from_link(link, &state.link_service)))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id, including a second delete of
/// the same id.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
