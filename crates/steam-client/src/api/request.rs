use std::time::Duration;

use super::*;
use crate::SteamError;

impl SteamApiClient {
    pub fn new(config: SteamApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Execute a GET request with query parameters and a bounded timeout.
    pub(super) async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<String, SteamError> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Steam API request failed");
            return Err(SteamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
