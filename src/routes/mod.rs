use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{Recommender, TextModel},
};

pub mod extract;
pub mod recommendations;

/// Shared application state
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub model: Arc<TextModel>,
    pub catalog: &'static str,
}

impl AppState {
    pub fn new(recommender: Recommender, model: TextModel, catalog: &'static str) -> Self {
        Self {
            recommender,
            model: Arc::new(model),
            catalog,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/recommend", post(recommendations::recommend))
        .with_state(state)
        // Request ID must be assigned before the trace span is created
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "catalog": state.catalog,
            "model": state.model.name(),
            "model_loaded": state.model.is_loaded(),
        })),
    )
}
