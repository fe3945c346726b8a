//! Service layer for business logic
//!
//! Shared between the HTTP handlers and the offline CLI commands.

mod prediction_service;

pub use prediction_service::*;
