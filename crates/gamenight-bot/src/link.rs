//! Account linking command flow.

use gamenight_db::{Database, DbError};
use steam_client::api::{OwnedGamesVisibility, SteamApiClient, VanityResolution};
use steam_client::profile_url::ProfileUrlRef;

use crate::BotError;
use crate::identity::ChatUser;
use crate::reply::{Card, Reply};

/// Outcome of a link attempt. Variants other than `Linked` are user-visible
/// states, not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked {
        persona_name: String,
        avatar_url: String,
    },
    /// The invoking identity is a bot or system account.
    BotInvoker,
    InvalidUrl,
    VanityNotFound,
    /// The invoker already has exactly this account linked.
    AlreadyLinkedSelf,
    /// Another user holds this account.
    AccountInUse,
    LibraryPrivate,
}

/// Link a Steam account to the invoking user and cache their library.
///
/// Linkage checks run before the ownership fetch so a rejected link never
/// costs a remote call beyond vanity resolution.
pub async fn link_account(
    db: &Database,
    steam: &SteamApiClient,
    invoker: &ChatUser,
    url: &str,
) -> Result<LinkOutcome, BotError> {
    if invoker.is_bot {
        return Ok(LinkOutcome::BotInvoker);
    }

    let steam_id = match ProfileUrlRef::parse(url) {
        None => return Ok(LinkOutcome::InvalidUrl),
        Some(ProfileUrlRef::SteamId(id)) => id,
        Some(ProfileUrlRef::Vanity(name)) => match steam.resolve_vanity(&name).await? {
            VanityResolution::Found(id) => id,
            VanityResolution::NotFound => return Ok(LinkOutcome::VanityNotFound),
        },
    };

    if db.has_same_steam_id(&invoker.id, &steam_id)? {
        return Ok(LinkOutcome::AlreadyLinkedSelf);
    }
    if db.steam_id_in_use(&steam_id)? {
        return Ok(LinkOutcome::AccountInUse);
    }

    let games = match steam.get_owned_games(&steam_id).await? {
        OwnedGamesVisibility::Public(games) => games,
        OwnedGamesVisibility::Private => return Ok(LinkOutcome::LibraryPrivate),
    };
    let summary = steam.get_player_summary(&steam_id).await?;

    db.replace_owned_games(&steam_id, &games)?;
    match db.set_steam_id(&invoker.id, &steam_id) {
        Ok(()) => {}
        // Lost the race: another user linked this account between the
        // in-use check and the write.
        Err(DbError::Conflict(_)) => return Ok(LinkOutcome::AccountInUse),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(
        user_id = %invoker.id,
        steam_id = %steam_id,
        games = games.len(),
        "Linked Steam account"
    );

    Ok(LinkOutcome::Linked {
        persona_name: summary.personaname,
        avatar_url: summary.avatarmedium,
    })
}

/// Render a link outcome for the chat platform.
pub fn render_link(outcome: &LinkOutcome) -> Reply {
    match outcome {
        LinkOutcome::Linked {
            persona_name,
            avatar_url,
        } => Reply::Card(
            Card::new(persona_name.clone(), "Successfully added your Steam library")
                .with_thumbnail(avatar_url.clone()),
        ),
        LinkOutcome::BotInvoker => Reply::text("Bots cannot use this command"),
        LinkOutcome::InvalidUrl => Reply::text(
            "Invalid URL format. Please make sure your URL is in one of the following formats:\n\
             ```Steam vanity url: https://steamcommunity.com/id/yourCustomID\n\n\
             Steam profile url: https://steamcommunity.com/profiles/yourSteamID64```",
        ),
        LinkOutcome::VanityNotFound => Reply::text("No Steam user was found with that URL."),
        LinkOutcome::AlreadyLinkedSelf => Reply::text(
            "You already have this steamID associated with your account. \
             If you want to refresh your library list, please use the /refresh command.",
        ),
        LinkOutcome::AccountInUse => {
            Reply::text("This steamID is already associated with another account.")
        }
        LinkOutcome::LibraryPrivate => {
            Reply::text("This account's game library is private. Please set to public.")
        }
    }
}
