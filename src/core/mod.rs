// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod finder;
pub mod sanitizer;
pub mod suggestion;

pub use catalog::{Catalog, CatalogError, Category, CATEGORY_FIELD};
pub use filters::{matches_breed, matches_curiosity, matches_exercise, matches_foods, NormalizedCriteria};
pub use finder::{capitalize_first, filter_pets};
pub use sanitizer::sanitize;
pub use suggestion::{validate_suggestion, ValidationError, MAX_SUGGESTION_CHARS};
