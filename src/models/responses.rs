use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{FilterCriteria, PetMatch, Suggestion};

/// Severity of a flash notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// The fixed set of notifications the site can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    SuggestionSent,
    SuggestionEmpty,
    SuggestionTooLong,
    SuggestionFailed,
}

impl NotificationKind {
    pub fn slug(self) -> &'static str {
        match self {
            NotificationKind::SuggestionSent => "suggestion_sent",
            NotificationKind::SuggestionEmpty => "suggestion_empty",
            NotificationKind::SuggestionTooLong => "suggestion_too_long",
            NotificationKind::SuggestionFailed => "suggestion_failed",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "suggestion_sent" => Some(NotificationKind::SuggestionSent),
            "suggestion_empty" => Some(NotificationKind::SuggestionEmpty),
            "suggestion_too_long" => Some(NotificationKind::SuggestionTooLong),
            "suggestion_failed" => Some(NotificationKind::SuggestionFailed),
            _ => None,
        }
    }

    pub fn level(self) -> NotificationLevel {
        match self {
            NotificationKind::SuggestionSent => NotificationLevel::Success,
            _ => NotificationLevel::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            NotificationKind::SuggestionSent => "Sugestão enviada com sucesso!",
            NotificationKind::SuggestionEmpty => "A sugestão não pode estar vazia!",
            NotificationKind::SuggestionTooLong => "A sugestão não pode ter mais de 500 caracteres!",
            NotificationKind::SuggestionFailed => "Não foi possível salvar a sugestão. Tente novamente.",
        }
    }
}

/// Notification as handed to the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: String,
    pub level: NotificationLevel,
    pub message: String,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind: kind.slug().to_string(),
            level: kind.level(),
            message: kind.message().to_string(),
        }
    }
}

/// Response for the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub categorias: Vec<String>,
    pub notification: Option<Notification>,
}

/// Response for the search page
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    pub resultados: Vec<PetMatch<'a>>,
    pub filters: FilterCriteria,
    pub total_results: usize,
}

/// A suggestion with its timestamp also rendered in the site's local time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionView {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub created_at_local: String,
}

impl SuggestionView {
    pub fn new(suggestion: Suggestion, offset: FixedOffset) -> Self {
        let created_at_local = suggestion
            .created_at
            .with_timezone(&offset)
            .format("%d/%m/%Y %H:%M")
            .to_string();

        Self {
            id: suggestion.id,
            text: suggestion.text,
            created_at: suggestion.created_at,
            created_at_local,
        }
    }
}

/// Response for the suggestions listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionView>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub categories: usize,
    pub database: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
