//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation and
//! update inputs are separate structs so store-assigned fields (`id`,
//! `created_at`) can never be supplied by callers.
//!
//! - [`Link`] - A stored alias → URL mapping
//! - [`NewLink`] - Input for creating a link
//! - [`LinkUpdate`] - Replacement values for an existing link

pub mod link;

pub use link::{Link, LinkUpdate, MAX_ORIGINAL_URL_LEN, MAX_SHORT_NAME_LEN, NewLink};
