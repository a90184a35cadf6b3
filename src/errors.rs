use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Content acquisition failed: {0}")]
    Acquisition(String),

    #[error("Source text too short: {0}")]
    InputTooShort(String),

    #[error("Quiz generation failed: {0}")]
    Generation(String),

    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::Acquisition(_) => "ACQUISITION_ERROR",
            AppError::InputTooShort(_) => "INPUT_TOO_SHORT",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::MissingCredential(_) => "MISSING_CREDENTIAL",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Acquisition(_) => StatusCode::BAD_GATEWAY,
            AppError::InputTooShort(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            status: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
