//! Helper functions shared across layers.
//!
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
