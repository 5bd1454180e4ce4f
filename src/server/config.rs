use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Directory uploaded media is written to and served from under `/media`.
    pub media_root: String,

    /// Public base URL of the application, used when logging the setup link.
    pub app_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .map_err(|_| ConfigError::MissingEnvVar("BIND_ADDR".to_string()))?,
            media_root: std::env::var("MEDIA_ROOT")
                .map_err(|_| ConfigError::MissingEnvVar("MEDIA_ROOT".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
        })
    }
}
