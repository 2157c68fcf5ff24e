//! Configuration module for the Be The Hero client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend
    pub api_url: String,
    /// Path to the SQLite file backing durable storage
    pub storage_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("BTH_API_URL").unwrap_or_else(|_| "http://localhost:3333/".to_string());

        let storage_path = env::var("BTH_STORAGE_PATH")
            .unwrap_or_else(|_| "./data/storage.sqlite".to_string())
            .into();

        let log_level = env::var("BTH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            storage_path,
            log_level,
        }
    }
}
