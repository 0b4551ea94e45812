//! Lazy multiplayer classification over the game-info cache.

use std::collections::HashSet;

use gamenight_db::Database;
use gamenight_db::game_info::GameInfo;
use steam_client::api::SteamApiClient;

use crate::BotError;

/// Classify every app id, returning only the multiplayer-capable entries.
///
/// Cache hits never touch the network. A miss is fetched from the
/// storefront and persisted before the next id is examined; the first
/// remote failure aborts the whole batch, and rows persisted before it
/// remain cached. Ids the storefront has no data for are skipped without
/// caching.
pub async fn classify_multiplayer(
    db: &Database,
    steam: &SteamApiClient,
    app_ids: &HashSet<u32>,
) -> Result<Vec<GameInfo>, BotError> {
    let mut multiplayer = Vec::new();

    for &app_id in app_ids {
        if let Some(info) = db.get_game_info(app_id)? {
            if info.multiplayer {
                multiplayer.push(info);
            }
            continue;
        }

        let Some(details) = steam.get_app_details(app_id).await? else {
            tracing::warn!(app_id, "Storefront has no data for app, skipping");
            continue;
        };

        let info = GameInfo {
            app_id,
            multiplayer: details.multiplayer,
            name: details.name,
            header: details.header_image,
        };
        db.insert_game_info(&info)?;

        if info.multiplayer {
            multiplayer.push(info);
        }
    }

    Ok(multiplayer)
}
