use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::ApiError,
    handlers::{
        resource::{self, IdQuery},
        MessageResponse,
    },
    AppState,
};

/// GET /api/movies - List every movie in the catalog
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    resource::list(state.movie_repository.as_ref()).await
}

/// POST /api/movies - Create a movie from the submitted fields
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    resource::create(state.movie_repository.as_ref(), payload).await
}

/// PUT /api/movies?id=ID - Merge the submitted fields into an existing movie
pub async fn update_movie(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    resource::update(state.movie_repository.as_ref(), query, payload).await
}

/// DELETE /api/movies?id=ID - Remove a movie
pub async fn delete_movie(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    resource::delete(state.movie_repository.as_ref(), query).await
}
