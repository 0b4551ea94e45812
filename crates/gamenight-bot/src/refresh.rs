//! Library refresh command flow.

use gamenight_db::Database;
use steam_client::api::{OwnedGamesVisibility, SteamApiClient};

use crate::BotError;
use crate::identity::ChatUser;
use crate::reply::Reply;

/// Outcome of a refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    BotInvoker,
    /// The invoker has no linked Steam account to refresh.
    NotLinked,
    LibraryPrivate,
}

/// Re-fetch the invoker's owned games and replace the cached set.
pub async fn refresh_library(
    db: &Database,
    steam: &SteamApiClient,
    invoker: &ChatUser,
) -> Result<RefreshOutcome, BotError> {
    if invoker.is_bot {
        return Ok(RefreshOutcome::BotInvoker);
    }

    let Some(steam_id) = db.linked_steam_id(&invoker.id)? else {
        return Ok(RefreshOutcome::NotLinked);
    };

    let games = match steam.get_owned_games(&steam_id).await? {
        OwnedGamesVisibility::Public(games) => games,
        OwnedGamesVisibility::Private => return Ok(RefreshOutcome::LibraryPrivate),
    };

    db.replace_owned_games(&steam_id, &games)?;
    tracing::info!(
        user_id = %invoker.id,
        steam_id = %steam_id,
        games = games.len(),
        "Refreshed Steam library"
    );

    Ok(RefreshOutcome::Refreshed)
}

/// Render a refresh outcome for the chat platform.
pub fn render_refresh(outcome: &RefreshOutcome) -> Reply {
    match outcome {
        RefreshOutcome::Refreshed => Reply::text("Successfully updated your Steam library."),
        RefreshOutcome::BotInvoker => Reply::text("Bots cannot use this command"),
        RefreshOutcome::NotLinked => Reply::text(
            "You haven't added your Steam profile. Please use the /add_id command first.",
        ),
        RefreshOutcome::LibraryPrivate => {
            Reply::text("This account's game library is private. Please set to public.")
        }
    }
}

#[cfg(test)]
mod tests {
    use steam_client::SteamApiConfig;

    use super::*;

    fn test_client() -> SteamApiClient {
        SteamApiClient::new(SteamApiConfig::new("test-key"))
    }

    #[tokio::test]
    async fn test_refresh_requires_existing_link() {
        let db = Database::open_in_memory().unwrap();
        db.ensure_user_exists("100", "alice").unwrap();

        let invoker = ChatUser {
            id: "100".into(),
            name: "alice".into(),
            is_bot: false,
        };
        let outcome = refresh_library(&db, &test_client(), &invoker)
            .await
            .unwrap();
        assert_eq!(outcome, RefreshOutcome::NotLinked);
    }

    #[tokio::test]
    async fn test_refresh_rejects_bot_invoker() {
        let db = Database::open_in_memory().unwrap();
        let bot = ChatUser {
            id: "1".into(),
            name: "beep".into(),
            is_bot: true,
        };
        let outcome = refresh_library(&db, &test_client(), &bot).await.unwrap();
        assert_eq!(outcome, RefreshOutcome::BotInvoker);
    }
}
