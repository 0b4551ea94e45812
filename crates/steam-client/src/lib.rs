//! Steam Web API and storefront client library.
//!
//! Provides community profile URL parsing, vanity resolution, player
//! summaries, owned-game retrieval, and storefront metadata lookups.

pub mod api;
pub mod profile_url;

use std::time::Duration;

/// Unified error type for the steam-client crate.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Steam API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Configuration injected into [`api::SteamApiClient`] at construction.
#[derive(Debug, Clone)]
pub struct SteamApiConfig {
    /// Steam Web API key.
    pub api_key: String,
    /// Timeout for vanity, profile and ownership lookups.
    pub lookup_timeout: Duration,
    /// Timeout for storefront metadata lookups.
    pub store_timeout: Duration,
}

impl SteamApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            lookup_timeout: Duration::from_secs(3),
            store_timeout: Duration::from_secs(5),
        }
    }
}
