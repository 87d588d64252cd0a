use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become `AppError::InvalidRequest`,
/// so malformed bodies get the same `{"detail": ...}` shape as other errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
