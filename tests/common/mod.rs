use axum::{
    routing::{get, post},
    Router,
};

use admin_backend::{config::Settings, database::Store, handlers, AppState};

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-secret";

#[allow(dead_code)] // Used in crud_integration_tests.rs
/// True when the environment provides a live MongoDB for the data-backed
/// suites. Check this before building the app; suites that need live data
/// skip themselves otherwise.
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Create a test application instance. Falls back to a placeholder
/// connection string when DATABASE_URL is unset; the driver opens sockets
/// lazily, so routes that never touch the store work either way.
pub async fn create_test_app() -> Router {
    if std::env::var("DATABASE_URL").is_err() {
        std::env::set_var("DATABASE_URL", "mongodb://127.0.0.1:27017/admin_test");
    }
    std::env::set_var("ADMIN_PASSWORD", TEST_ADMIN_PASSWORD);
    std::env::set_var("ENVIRONMENT", "development");
    std::env::set_var("LOG_LEVEL", "error");

    let settings = Settings::new_with_env_file(false).expect("Failed to create test config");

    let store = Store::connect(&settings)
        .await
        .expect("Failed to open store handle");

    let app_state = AppState::new_with_store(settings, store);

    create_test_router(app_state)
}

/// Create a test router with all API endpoints
pub fn create_test_router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/api/health", get(handlers::health_check))
        .route("/api/health/live", get(handlers::liveness_check))
        // Session guard endpoints
        .route("/api/login", post(handlers::auth_handlers::login))
        .route("/api/check-auth", get(handlers::auth_handlers::check_auth))
        // Movie collection endpoints
        .route(
            "/api/movies",
            get(handlers::movie_handlers::list_movies)
                .post(handlers::movie_handlers::create_movie)
                .put(handlers::movie_handlers::update_movie)
                .delete(handlers::movie_handlers::delete_movie),
        )
        // User collection endpoints
        .route(
            "/api/users",
            get(handlers::user_handlers::list_users)
                .post(handlers::user_handlers::create_user)
                .put(handlers::user_handlers::update_user)
                .delete(handlers::user_handlers::delete_user),
        )
        .with_state(app_state)
}

/// Helper to extract response body as bytes
pub async fn extract_body(response: axum::response::Response) -> Vec<u8> {
    use axum::body::to_bytes;
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    body.to_vec()
}
