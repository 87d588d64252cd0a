use axum::{extract::State, Extension, Json};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{GenreRequest, RecommendationResponse},
    routes::{extract::AppJson, AppState},
};

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<GenreRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        genre = %request.genre,
        "Processing recommendation request"
    );

    let recommendation = state.recommender.recommend(&request.genre).await?;

    tracing::info!(
        request_id = %request_id,
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse { recommendation }))
}
