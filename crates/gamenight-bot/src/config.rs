//! Runtime configuration loaded from the environment.

use anyhow::Context;
use steam_client::SteamApiConfig;

/// Runtime configuration for the bot core.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Steam Web API key, injected into the client at construction.
    pub steam_api_key: String,
    /// SQLite database path.
    pub database_path: String,
}

impl BotConfig {
    /// Load configuration from the environment, reading `.env` candidates
    /// first.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        load_dotenv();

        let steam_api_key =
            std::env::var("STEAM_API_KEY").context("STEAM_API_KEY is not set")?;
        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "gamenight.db".into());

        Ok(Self {
            steam_api_key,
            database_path,
        })
    }

    /// Steam client configuration derived from this config.
    pub fn steam_api_config(&self) -> SteamApiConfig {
        SteamApiConfig::new(self.steam_api_key.clone())
    }
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
