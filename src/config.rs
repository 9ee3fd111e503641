use serde::Deserialize;

use crate::error::ApiError;

/// Process configuration, loaded from environment variables (plus an
/// optional `.env` file). `DATABASE_URL` and `ADMIN_PASSWORD` have no
/// defaults and must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// MongoDB connection string, including the database name.
    pub database_url: String,
    /// The shared admin secret checked by the session guard.
    pub admin_password: String,
    /// Runtime mode; anything other than "development" marks cookies Secure.
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Comma-separated list of allowed CORS origins; empty means permissive
    /// development mode.
    pub cors_allow_origins: String,
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    pub fn new() -> Result<Self, ApiError> {
        Self::new_with_env_file(true)
    }

    /// Build settings, optionally loading a `.env` file first. Tests pass
    /// `false` so they only see what they set themselves.
    pub fn new_with_env_file(load_env_file: bool) -> Result<Self, ApiError> {
        if load_env_file {
            dotenvy::dotenv().ok();
        }

        let config = base_builder()?
            .add_source(config::Environment::default())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self, ApiError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate().map_err(ApiError::Configuration)?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.trim().is_empty() {
            return Err("DATABASE_URL must not be empty".to_string());
        }
        if self.admin_password.trim().is_empty() {
            return Err("ADMIN_PASSWORD must not be empty".to_string());
        }
        Ok(())
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allow_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn base_builder(
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    Ok(config::Config::builder()
        .set_default("environment", "development")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8000)?
        .set_default("cors_allow_origins", "")?
        .set_default("log_level", "INFO")?
        .set_default("log_format", "json")?)
}
