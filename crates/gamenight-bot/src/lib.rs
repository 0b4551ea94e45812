//! Command-layer core for the gamenight bot.
//!
//! Orchestrates account linking, library refresh, and shared-game
//! resolution over the persistence layer and the Steam client. The chat
//! platform shell feeds validated command inputs in and renders the
//! [`reply::Reply`] values produced here; nothing in this crate talks to
//! the platform directly.

pub mod config;
pub mod identity;
pub mod link;
pub mod metadata;
pub mod refresh;
pub mod reply;
pub mod shared_games;

use gamenight_db::DbError;
use steam_client::SteamError;

/// Unified error type for command orchestration.
///
/// Expected user-visible states (private library, unlinked members, vanity
/// name not found, ...) are modeled as command outcomes, not errors; this
/// type carries the failures a user can only retry.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("Steam API error: {0}")]
    Steam(#[from] SteamError),
}
