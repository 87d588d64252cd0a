use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message returned when the catalog answers with a non-success status
pub const UPSTREAM_FETCH_DETAIL: &str = "Failed to fetch books from Google Books API.";

/// Message returned when the text model could not be initialized
pub const MODEL_INIT_DETAIL: &str = "Error initializing the model.";

/// Message returned when the request body is not a valid genre request
pub const INVALID_REQUEST_DETAIL: &str = "Invalid request body.";

/// Message returned for any other failure; the cause is only logged
pub const GENERIC_DETAIL: &str = "An error occurred.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream fetch error: {0}")]
    UpstreamFetch(String),

    #[error("Model initialization error: {0}")]
    ModelInit(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Client-facing detail message. Never includes the underlying cause.
    pub fn detail(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => INVALID_REQUEST_DETAIL,
            AppError::UpstreamFetch(_) => UPSTREAM_FETCH_DETAIL,
            AppError::ModelInit(_) => MODEL_INIT_DETAIL,
            AppError::HttpClient(_) | AppError::Internal(_) => GENERIC_DETAIL,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            AppError::InvalidRequest(cause) => {
                tracing::warn!(error = %cause, "Rejected request body");
            }
            AppError::UpstreamFetch(cause) => {
                tracing::error!(error = %cause, "Catalog fetch failed");
            }
            other => {
                tracing::error!(error = %other, "Unexpected error");
            }
        }

        let body = Json(json!({
            "detail": self.detail()
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    /// Request URLs carry the catalog API key, so they are stripped here
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.without_url())
    }
}

pub type AppResult<T> = Result<T, AppError>;
