use super::*;
use crate::SteamError;

impl SteamApiClient {
    /// Fetch the public profile summary for a SteamID64.
    pub async fn get_player_summary(&self, steam_id: &str) -> Result<PlayerSummary, SteamError> {
        let url = format!("{API_BASE}/ISteamUser/GetPlayerSummaries/v0002/");
        let body = self
            .get_text(
                &url,
                &[
                    ("key", self.config.api_key.as_str()),
                    ("steamids", steam_id),
                ],
                self.config.lookup_timeout,
            )
            .await?;
        let envelope: models::ApiEnvelope<models::PlayerSummariesResponse> =
            serde_json::from_str(&body)?;

        envelope
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| {
                SteamError::MalformedResponse("player summary response contained no players".into())
            })
    }
}
