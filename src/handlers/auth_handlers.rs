use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    auth::session::{self, AuthState},
    error::ApiError,
    handlers::MessageResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/login - Exchange the admin password for a session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    match session::verify_password(&payload.password, &state.config) {
        AuthState::Authenticated => {
            let jar = jar.add(session::session_cookie(&state.config));
            Ok((
                jar,
                Json(MessageResponse {
                    message: "Login successful".to_string(),
                }),
            ))
        }
        AuthState::Unauthenticated => Err(ApiError::authentication("Invalid password")),
    }
}

/// GET /api/check-auth - Report whether the request carries a valid session
pub async fn check_auth(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MessageResponse>, ApiError> {
    match session::authenticate(&jar, &state.config) {
        AuthState::Authenticated => Ok(Json(MessageResponse {
            message: "Authenticated".to_string(),
        })),
        AuthState::Unauthenticated => Err(ApiError::authentication("Not authenticated")),
    }
}
