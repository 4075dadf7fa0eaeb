// Runtime configuration, read once at startup.
//
// Responsibilities
// - Load the listen port and the Firestore connection settings from the
//   environment (honoring a local .env file).
// - Fail fast with a typed error when a required variable is missing.

use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_FIRESTORE_HOST: &str = "https://firestore.googleapis.com";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// Google Cloud project owning the Firestore database.
    pub google_cloud_project: String,
    /// Base URL of the Firestore REST endpoint. Overridable to point at the
    /// emulator.
    pub firestore_host: String,
    /// Bearer token attached to store requests. Absent when talking to the
    /// emulator.
    pub firestore_access_token: Option<String>,
    /// Upper bound on any single store call.
    pub store_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();

        let port = parse_or_default("PORT", DEFAULT_PORT)?;
        let google_cloud_project = env::var("GOOGLE_CLOUD_PROJECT")
            .map_err(|_| ConfigError::MissingVar("GOOGLE_CLOUD_PROJECT"))?;
        let firestore_host = env::var("FIRESTORE_HOST")
            .unwrap_or_else(|_| DEFAULT_FIRESTORE_HOST.to_string());
        let firestore_access_token = env::var("FIRESTORE_ACCESS_TOKEN").ok();
        let store_timeout = Duration::from_secs(parse_or_default(
            "STORE_TIMEOUT_SECS",
            DEFAULT_STORE_TIMEOUT_SECS,
        )?);

        Ok(Config {
            port,
            google_cloud_project,
            firestore_host,
            firestore_access_token,
            store_timeout,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
        Err(_) => Ok(default),
    }
}
