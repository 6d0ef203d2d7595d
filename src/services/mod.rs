// Service exports
pub mod suggestions;

pub use suggestions::{StoreError, SubmitError, SuggestionStore};
