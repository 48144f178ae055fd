//! Domain layer containing business entities and data-access contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer; business rules are applied in
//! [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`pagination`] - Page windows and `Content-Range` descriptors
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod pagination;
pub mod repositories;
