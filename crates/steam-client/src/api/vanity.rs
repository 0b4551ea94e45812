use super::*;
use crate::SteamError;

impl SteamApiClient {
    /// Resolve a vanity profile name to a SteamID64.
    pub async fn resolve_vanity(
        &self,
        vanity_name: &str,
    ) -> Result<VanityResolution, SteamError> {
        let url = format!("{API_BASE}/ISteamUser/ResolveVanityURL/v1/");
        let body = self
            .get_text(
                &url,
                &[
                    ("key", self.config.api_key.as_str()),
                    ("vanityurl", vanity_name),
                ],
                self.config.lookup_timeout,
            )
            .await?;
        let envelope: models::ApiEnvelope<models::VanityResponse> = serde_json::from_str(&body)?;

        if envelope.response.success == 1 {
            let steamid = envelope.response.steamid.ok_or_else(|| {
                SteamError::MalformedResponse("vanity match is missing a steamid".into())
            })?;
            return Ok(VanityResolution::Found(steamid));
        }
        Ok(VanityResolution::NotFound)
    }
}
