use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use chrono::FixedOffset;
use std::sync::Arc;

use crate::core::{filter_pets, Catalog, ValidationError};
use crate::models::{
    ErrorResponse, HealthResponse, IndexResponse, NotificationKind, SearchParams, SearchResponse,
    SuggestionForm, SuggestionView, SuggestionsResponse,
};
use crate::routes::flash::{clear_flash_cookie, flash_cookie, read_flash, FLASH_COOKIE};
use crate::services::{SubmitError, SuggestionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub suggestions: Arc<SuggestionStore>,
    pub display_offset: FixedOffset,
}

/// Configure all page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/submit_suggestion", web::post().to(submit_suggestion))
        .route("/search", web::get().to(search))
        .route("/suggestions", web::get().to(view_suggestions))
        .route("/health", web::get().to(health_check));
}

/// Landing page data: category names plus any pending notification
///
/// GET /
async fn index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let notification = read_flash(&req);

    let mut response = HttpResponse::Ok();
    if req.cookie(FLASH_COOKIE).is_some() {
        response.cookie(clear_flash_cookie());
    }

    response.json(IndexResponse {
        categorias: state.catalog.category_names(),
        notification,
    })
}

/// Accept a visitor suggestion and redirect back to the landing page
///
/// POST /submit_suggestion
///
/// Form body: `suggestion=<text>`. The outcome is reported through a flash
/// notification on the redirected page.
async fn submit_suggestion(
    state: web::Data<AppState>,
    form: web::Form<SuggestionForm>,
) -> impl Responder {
    let kind = match state.suggestions.submit(form.suggestion.as_deref()).await {
        Ok(suggestion) => {
            tracing::info!("Stored suggestion {}", suggestion.id);
            NotificationKind::SuggestionSent
        }
        Err(SubmitError::Validation(ValidationError::Empty)) => {
            tracing::warn!("Rejected empty suggestion");
            NotificationKind::SuggestionEmpty
        }
        Err(SubmitError::Validation(ValidationError::TooLong { length })) => {
            tracing::warn!("Rejected suggestion with {} characters", length);
            NotificationKind::SuggestionTooLong
        }
        Err(SubmitError::Store(e)) => {
            tracing::error!("Failed to store suggestion: {}", e);
            NotificationKind::SuggestionFailed
        }
    };

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(flash_cookie(kind))
        .finish()
}

/// Filter the catalog
///
/// GET /search?categoria=&raca=&comida_permitida=&curiosidade=&exercicios=
///
/// `comida_permitida` may be repeated. Every value is sanitized before use
/// and the sanitized values are echoed back under `filters`.
async fn search(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let criteria = SearchParams::from_pairs(query.into_inner()).into_criteria();

    if criteria.is_unconstrained() {
        tracing::debug!("Unconstrained search, returning the whole catalog");
    } else {
        tracing::debug!("Searching catalog with {:?}", criteria);
    }

    let resultados = filter_pets(&state.catalog, &criteria);

    tracing::info!("Search returned {} pets", resultados.len());

    HttpResponse::Ok().json(SearchResponse {
        total_results: resultados.len(),
        resultados,
        filters: criteria,
    })
}

/// All suggestions, newest first
///
/// GET /suggestions
async fn view_suggestions(state: web::Data<AppState>) -> impl Responder {
    match state.suggestions.list_all().await {
        Ok(suggestions) => {
            let suggestions: Vec<SuggestionView> = suggestions
                .into_iter()
                .map(|s| SuggestionView::new(s, state.display_offset))
                .collect();

            HttpResponse::Ok().json(SuggestionsResponse {
                count: suggestions.len(),
                suggestions,
            })
        }
        Err(e) => {
            tracing::error!("Failed to list suggestions: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "Could not load suggestions".to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.suggestions.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        categories: state.catalog.len(),
        database: db_healthy,
    })
}
