// Route exports
pub mod flash;
pub mod pages;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub use pages::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure);
}

/// JSON error body for malformed request payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: "Malformed query string".to_string(),
        status_code: 400,
    }
    .into()
}

/// Handle form body errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_form".to_string(),
        message: "Malformed form body".to_string(),
        status_code: 400,
    }
    .into()
}
