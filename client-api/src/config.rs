//! Process configuration from environment variables and `.env`.
//!
//! # Design
//! Variables are loaded with dotenvy (a `.env` at the working directory is
//! optional) and deserialized with envy, so `APP_NAME`, `PORT`, and friends
//! map straight onto the struct fields. Every field has a default; an empty
//! environment yields a working config. The CORS list fields accept `*` or
//! a comma-separated list, matching the origins/methods/headers knobs of
//! common CORS middleware.

use anyhow::Result;
use axum::http::{HeaderName, HeaderValue, Method};
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Display name, logged at startup.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Raises log verbosity to DEBUG. No effect on CRUD behavior.
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// `*` or comma-separated origins.
    #[serde(default = "default_wildcard")]
    pub cors_origins: String,
    #[serde(default)]
    pub cors_allow_credentials: bool,
    #[serde(default = "default_wildcard")]
    pub cors_allow_methods: String,
    #[serde(default = "default_wildcard")]
    pub cors_allow_headers: String,
}

fn default_app_name() -> String {
    "Client API".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_wildcard() -> String {
    "*".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            debug: false,
            host: default_host(),
            port: default_port(),
            cors_origins: default_wildcard(),
            cors_allow_credentials: false,
            cors_allow_methods: default_wildcard(),
            cors_allow_headers: default_wildcard(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the CORS layer from the configured origin/method/header lists.
    ///
    /// tower-http rejects `*` combined with credentials, so wildcard
    /// entries mirror the request instead when credentials are allowed.
    pub fn cors_layer(&self) -> CorsLayer {
        let credentials = self.cors_allow_credentials;

        let origins = match split_list(&self.cors_origins) {
            None if credentials => AllowOrigin::mirror_request(),
            None => AllowOrigin::any(),
            Some(list) => AllowOrigin::list(
                list.iter().filter_map(|s| s.parse::<HeaderValue>().ok()),
            ),
        };
        let methods = match split_list(&self.cors_allow_methods) {
            None if credentials => AllowMethods::mirror_request(),
            None => AllowMethods::any(),
            Some(list) => {
                AllowMethods::list(list.iter().filter_map(|s| s.parse::<Method>().ok()))
            }
        };
        let headers = match split_list(&self.cors_allow_headers) {
            None if credentials => AllowHeaders::mirror_request(),
            None => AllowHeaders::any(),
            Some(list) => {
                AllowHeaders::list(list.iter().filter_map(|s| s.parse::<HeaderName>().ok()))
            }
        };

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(credentials)
    }
}

/// `None` means wildcard; otherwise the trimmed, non-empty entries.
fn split_list(value: &str) -> Option<Vec<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return None;
    }
    Some(
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    )
}
