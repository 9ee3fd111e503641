pub mod auth_handlers;
pub mod health_handlers;
pub mod movie_handlers;
pub mod resource;
pub mod user_handlers;

pub use health_handlers::{health_check, liveness_check};

use serde::Serialize;

/// Body for endpoints that acknowledge with a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
