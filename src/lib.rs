//! Pet Facts - pet-care facts catalog and visitor suggestion service
//!
//! Serves a read-only catalog of pet-care facts filtered by query parameters
//! and keeps an append-only log of sanitized visitor suggestions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_pets, sanitize, validate_suggestion, Catalog, CatalogError, ValidationError};
pub use models::{FilterCriteria, PetMatch, PetRecord, Suggestion};
pub use services::{SubmitError, SuggestionStore};
