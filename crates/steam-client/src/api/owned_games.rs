use std::collections::HashSet;

use super::*;
use crate::SteamError;

impl SteamApiClient {
    /// Fetch the owned-game set for a Steam account.
    ///
    /// Free games with playtime are included so shared free-to-play titles
    /// stay eligible.
    pub async fn get_owned_games(
        &self,
        steam_id: &str,
    ) -> Result<OwnedGamesVisibility, SteamError> {
        let url = format!("{API_BASE}/IPlayerService/GetOwnedGames/v1/");
        let body = self
            .get_text(
                &url,
                &[
                    ("key", self.config.api_key.as_str()),
                    ("steamid", steam_id),
                    ("include_played_free_games", "true"),
                ],
                self.config.lookup_timeout,
            )
            .await?;
        let envelope: models::ApiEnvelope<models::OwnedGamesResponse> =
            serde_json::from_str(&body)?;

        match envelope.response.games {
            Some(games) => {
                let set: HashSet<u32> = games.into_iter().map(|game| game.appid).collect();
                Ok(OwnedGamesVisibility::Public(set))
            }
            None => Ok(OwnedGamesVisibility::Private),
        }
    }
}
