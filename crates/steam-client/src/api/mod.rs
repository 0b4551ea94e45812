//! Typed access to the Steam Web API and storefront endpoints.
//!
//! All calls carry the injected Web API key and a bounded per-request
//! timeout. Outcomes that are states rather than failures (vanity name not
//! found, private library, storefront without data) are modeled as enum
//! variants, never errors.

mod owned_games;
mod players;
mod request;
mod store;
mod vanity;

pub mod models;

pub use models::{
    AppDetails, OwnedGamesVisibility, PlayerSummary, VanityResolution,
};

use crate::SteamApiConfig;

const API_BASE: &str = "https://api.steampowered.com";
const STORE_BASE: &str = "https://store.steampowered.com/api";

/// Steam Web API client with the key injected at construction.
pub struct SteamApiClient {
    pub(super) http: reqwest::Client,
    pub(super) config: SteamApiConfig,
}
