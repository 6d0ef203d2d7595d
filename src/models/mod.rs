// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Curiosities, FilterCriteria, PetMatch, PetRecord, Suggestion};
pub use requests::{NewSuggestion, SearchParams, SuggestionForm};
pub use responses::{
    ErrorResponse, HealthResponse, IndexResponse, Notification, NotificationKind, NotificationLevel,
    SearchResponse, SuggestionView, SuggestionsResponse,
};
