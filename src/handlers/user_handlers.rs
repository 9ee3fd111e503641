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

/// GET /api/users - List every user account
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    resource::list(state.user_repository.as_ref()).await
}

/// POST /api/users - Create a user from the submitted fields
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    resource::create(state.user_repository.as_ref(), payload).await
}

/// PUT /api/users?id=ID - Merge the submitted fields into an existing user
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    resource::update(state.user_repository.as_ref(), query, payload).await
}

/// DELETE /api/users?id=ID - Remove a user
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    resource::delete(state.user_repository.as_ref(), query).await
}
