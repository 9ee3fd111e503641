use std::sync::Arc;

use crate::{
    config::Settings,
    database::Store,
    models::{Movie, User},
    repositories::{DocumentRepository, MongoDocumentRepository},
};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod utils;

/// Shared application state containing all dependencies. Handlers borrow
/// the store per request and never close it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: Store,
    pub movie_repository: Arc<dyn DocumentRepository + Send + Sync>,
    pub user_repository: Arc<dyn DocumentRepository + Send + Sync>,
}

impl AppState {
    /// Create new application state, opening the store handle.
    pub async fn new(config: Settings) -> Result<Self, error::ApiError> {
        let store = Store::connect(&config).await?;
        Ok(Self::new_with_store(config, store))
    }

    /// Create new application state over an existing store handle.
    pub fn new_with_store(config: Settings, store: Store) -> Self {
        let movie_repository: Arc<dyn DocumentRepository + Send + Sync> = Arc::new(
            MongoDocumentRepository::new(store.collection(Movie::COLLECTION), "Movie"),
        );
        let user_repository: Arc<dyn DocumentRepository + Send + Sync> = Arc::new(
            MongoDocumentRepository::new(store.collection(User::COLLECTION), "User"),
        );

        Self {
            config: Arc::new(config),
            store,
            movie_repository,
            user_repository,
        }
    }
}
