use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::signal;

use admin_backend::{config, handlers, middleware, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first
    let config = config::Settings::new()?;

    middleware::init_logging(&config.log_level, &config.log_format)?;

    tracing::info!("Starting admin backend v{}", env!("CARGO_PKG_VERSION"));

    let app_state = AppState::new(config.clone()).await?;

    let cors_layer = middleware::create_cors_layer(config.cors_origins());

    let app = Router::new()
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
        // Apply middleware layers (global)
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .layer(middleware::create_logging_layer())
        .layer(cors_layer);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        }
    }
}
