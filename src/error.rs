use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;
use crate::service::PredictError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Malformed form submission
    ValidationError(String),
    /// Player name not in the player list
    UnknownPlayer(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::UnknownPlayer(name) => write!(f, "Unknown player: {}", name),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::UnknownPlayer(name) => AppError::UnknownPlayer(name),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownPlayer(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
            AppError::UnknownPlayer(name) => {
                ("unknown_player", format!("No feature row for player {:?}", name))
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}
