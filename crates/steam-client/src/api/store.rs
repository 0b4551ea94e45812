use super::*;
use crate::SteamError;

/// Category id the storefront uses to tag multiplayer-capable titles.
const MULTIPLAYER_CATEGORY_ID: u32 = 1;

impl SteamApiClient {
    /// Fetch storefront metadata for one app.
    ///
    /// `Ok(None)` means the storefront reports no data for the id; the
    /// caller skips it without caching.
    pub async fn get_app_details(&self, app_id: u32) -> Result<Option<AppDetails>, SteamError> {
        let url = format!("{STORE_BASE}/appdetails");
        let id = app_id.to_string();
        let body = self
            .get_text(
                &url,
                &[("appids", id.as_str()), ("l", "en")],
                self.config.store_timeout,
            )
            .await?;
        let mut map: models::AppDetailsMap = serde_json::from_str(&body)?;

        let Some(entry) = map.remove(&id) else {
            return Ok(None);
        };
        if !entry.success {
            return Ok(None);
        }
        let Some(data) = entry.data else {
            return Ok(None);
        };

        let multiplayer = data
            .categories
            .iter()
            .any(|category| category.id == MULTIPLAYER_CATEGORY_ID);

        Ok(Some(AppDetails {
            name: data.name,
            header_image: data.header_image,
            multiplayer,
        }))
    }
}
