//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared across handlers.
///
/// Holds no request data; the only shared resource is the service and the
/// storage pool behind its repository.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
