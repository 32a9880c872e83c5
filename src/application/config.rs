use crate::constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
/// Authentication credentials for the unsent API
pub struct Credentials {
    /// API key sent as a bearer token
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the REST API, including the version prefix
    pub base_url: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
/// Main configuration for the unsent API client
///
/// `Default` leaves the key empty and points at the public endpoint without
/// touching the environment; use [`Config::new`] to read it.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. The API key comes from
    /// `UNSENT_API_KEY` and the base URL from `UNSENT_BASE_URL`, falling back
    /// to the public endpoint.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_none::<String>(API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            error!("{} not found in environment variables or .env file", API_KEY_ENV);
        }

        Config {
            credentials: Credentials { api_key },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(BASE_URL_ENV, DEFAULT_BASE_URL.to_string()),
            },
        }
    }

    /// Creates a configuration for the given key and the default base URL,
    /// without reading the environment
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the base URL, e.g. for a self-hosted instance
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.rest_api.base_url.trim_end_matches('/')
    }
}
