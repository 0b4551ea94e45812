use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Wrapper for `ISteamUser` / `IPlayerService` response bodies.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: T,
}

/// Body of `ResolveVanityURL`. `success == 1` means a match was found.
#[derive(Debug, Deserialize)]
pub struct VanityResponse {
    pub success: i32,
    #[serde(default)]
    pub steamid: Option<String>,
}

/// Outcome of a vanity-name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VanityResolution {
    Found(String),
    NotFound,
}

/// Body of `GetPlayerSummaries`.
#[derive(Debug, Deserialize)]
pub struct PlayerSummariesResponse {
    pub players: Vec<PlayerSummary>,
}

/// Player profile from `GetPlayerSummaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: String,
    #[serde(default)]
    pub avatarmedium: String,
    #[serde(default)]
    pub profileurl: String,
}

/// Body of `GetOwnedGames`. A private profile omits the `games` array.
#[derive(Debug, Deserialize)]
pub struct OwnedGamesResponse {
    #[serde(default)]
    pub game_count: Option<u32>,
    #[serde(default)]
    pub games: Option<Vec<OwnedGameEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct OwnedGameEntry {
    pub appid: u32,
}

/// Outcome of an owned-games lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedGamesVisibility {
    /// Library is public; the set may be empty.
    Public(HashSet<u32>),
    /// Profile visibility hides the library. A state, not an error.
    Private,
}

/// Storefront `appdetails` responses are keyed by app id.
pub type AppDetailsMap = HashMap<String, AppDetailsEntry>;

#[derive(Debug, Deserialize)]
pub struct AppDetailsEntry {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetailsData>,
}

#[derive(Debug, Deserialize)]
pub struct AppDetailsData {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_header")]
    pub header_image: String,
    #[serde(default)]
    pub categories: Vec<AppCategory>,
}

#[derive(Debug, Deserialize)]
pub struct AppCategory {
    pub id: u32,
    #[serde(default)]
    pub description: String,
}

/// Display metadata plus multiplayer classification for one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDetails {
    pub name: String,
    pub header_image: String,
    pub multiplayer: bool,
}

fn default_name() -> String {
    "Unknown".into()
}

fn default_header() -> String {
    "None Given".into()
}
