// negocio_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Request body or path rejected before the handler body runs.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(_) | AppError::NotFound(_) => {
        tracing::warn!(application_error = %self, "Responding with client error");
      }
      AppError::Config(_) | AppError::Sqlx(_) => {
        tracing::error!(application_error = %self, "Responding with server error");
      }
    }

    let detail = match self {
      AppError::Validation(m) => json!(m),
      // Not-found details are a list of messages: `{"detail": ["..."]}`.
      AppError::NotFound(m) => json!([m]),
      AppError::Config(_) => json!("Configuration issue"),
      // Store failures never leak driver messages to the client.
      AppError::Sqlx(_) => json!("Database operation failed"),
    };

    HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
