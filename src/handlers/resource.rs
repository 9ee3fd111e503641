//! The CRUD handler core shared by every admin collection. The per-entity
//! handler modules are thin instantiations over their repository.

use axum::{http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::ApiError,
    handlers::MessageResponse,
    repositories::DocumentRepository,
    utils::json::{document_to_json, json_to_document},
};

/// Target identity, taken from the `id` query parameter.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

pub async fn list(repo: &dyn DocumentRepository) -> Result<Json<Value>, ApiError> {
    let documents = repo.list().await?;
    Ok(Json(Value::Array(
        documents.iter().map(document_to_json).collect(),
    )))
}

pub async fn create(
    repo: &dyn DocumentRepository,
    payload: Value,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let record = json_to_document(payload)?;
    let created = repo.create(record).await?;
    Ok((StatusCode::CREATED, Json(document_to_json(&created))))
}

pub async fn update(
    repo: &dyn DocumentRepository,
    query: IdQuery,
    payload: Value,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(repo, query)?;
    let changes = json_to_document(payload)?;
    let updated = repo.update(&id, changes).await?;
    Ok(Json(document_to_json(&updated)))
}

pub async fn delete(
    repo: &dyn DocumentRepository,
    query: IdQuery,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = require_id(repo, query)?;
    repo.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", repo.entity()),
    }))
}

fn require_id(repo: &dyn DocumentRepository, query: IdQuery) -> Result<String, ApiError> {
    query
        .id
        .ok_or_else(|| ApiError::validation(format!("{} ID not provided", repo.entity())))
}
