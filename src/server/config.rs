//! Environment based server configuration.

use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

static DEFAULT_PORT: u16 = 8000;
static DEFAULT_PLANETS_DATA_PATH: &str = "data/kepler_data.csv";
static DEFAULT_LAUNCH_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";
static DEFAULT_PUBLIC_DIR: &str = "public";
static DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Server configuration read from environment variables
pub struct Config {
    /// `DATABASE_URL`, required
    pub database_url: String,
    /// `PORT`, defaults to 8000
    pub port: u16,
    /// `PLANETS_DATA_PATH`, location of the Kepler observation CSV
    pub planets_data_path: PathBuf,
    /// `LAUNCH_API_URL`, bulk query endpoint of the launch history provider
    pub launch_api_url: String,
    /// `PUBLIC_DIR`, directory holding the built client application
    pub public_dir: PathBuf,
    /// `CLIENT_ORIGIN`, origin allowed by CORS
    pub client_origin: HeaderValue,
}

impl Config {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        let client_origin = lookup("CLIENT_ORIGIN").unwrap_or(DEFAULT_CLIENT_ORIGIN.to_string());
        let client_origin =
            HeaderValue::from_str(&client_origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CLIENT_ORIGIN".to_string(),
                reason: format!("{}", e),
            })?;

        Ok(Self {
            database_url,
            port,
            planets_data_path: lookup("PLANETS_DATA_PATH")
                .unwrap_or(DEFAULT_PLANETS_DATA_PATH.to_string())
                .into(),
            launch_api_url: lookup("LAUNCH_API_URL").unwrap_or(DEFAULT_LAUNCH_API_URL.to_string()),
            public_dir: lookup("PUBLIC_DIR")
                .unwrap_or(DEFAULT_PUBLIC_DIR.to_string())
                .into(),
            client_origin,
        })
    }
}
