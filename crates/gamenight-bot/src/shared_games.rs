//! Shared multiplayer game resolution across a group of users.

use std::collections::HashSet;

use gamenight_db::game_info::GameInfo;
use gamenight_db::{Database, picker};
use steam_client::api::SteamApiClient;

use crate::BotError;
use crate::identity::ChatUser;
use crate::metadata;
use crate::reply::{Card, Reply};

/// Outcome of a group shared-game query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedGamesOutcome {
    Picked(GameInfo),
    /// A bot or system identity was passed as a group member.
    BotMember,
    DuplicateMembers,
    /// Members with no linked Steam account; exactly the unlinked set.
    Unlinked(Vec<ChatUser>),
    NoSharedMultiplayer,
}

/// Resolve one random shared multiplayer game for the given members.
///
/// Ownership sets are read from the cache only; refreshing a stale library
/// is its own command. Works for any member count, including a single
/// member (their own multiplayer games) and zero members (empty share).
pub async fn resolve_shared_game(
    db: &Database,
    steam: &SteamApiClient,
    members: &[ChatUser],
) -> Result<SharedGamesOutcome, BotError> {
    if let Some(outcome) = validate_members(members) {
        return Ok(outcome);
    }

    let mut unlinked = Vec::new();
    let mut steam_ids = Vec::with_capacity(members.len());
    for member in members {
        match db.linked_steam_id(&member.id)? {
            Some(steam_id) => steam_ids.push(steam_id),
            None => unlinked.push(member.clone()),
        }
    }
    if !unlinked.is_empty() {
        return Ok(SharedGamesOutcome::Unlinked(unlinked));
    }

    let mut libraries = Vec::with_capacity(steam_ids.len());
    for steam_id in &steam_ids {
        libraries.push(db.get_owned_games(steam_id)?);
    }
    let shared = intersect_all(libraries);

    let candidates = metadata::classify_multiplayer(db, steam, &shared).await?;
    if candidates.is_empty() {
        return Ok(SharedGamesOutcome::NoSharedMultiplayer);
    }

    match picker::pick_game(&candidates) {
        Some(game) => Ok(SharedGamesOutcome::Picked(game.clone())),
        None => Ok(SharedGamesOutcome::NoSharedMultiplayer),
    }
}

/// Validate group composition. Runs before any store access.
fn validate_members(members: &[ChatUser]) -> Option<SharedGamesOutcome> {
    if members.iter().any(|member| member.is_bot) {
        return Some(SharedGamesOutcome::BotMember);
    }
    let mut seen = HashSet::new();
    if !members.iter().all(|member| seen.insert(member.id.as_str())) {
        return Some(SharedGamesOutcome::DuplicateMembers);
    }
    None
}

/// N-ary set intersection. Empty input yields the empty set.
fn intersect_all(mut sets: Vec<HashSet<u32>>) -> HashSet<u32> {
    let Some(mut shared) = sets.pop() else {
        return HashSet::new();
    };
    for set in &sets {
        shared.retain(|app_id| set.contains(app_id));
    }
    shared
}

/// Render a shared-game outcome for the chat platform.
pub fn render_shared_games(outcome: &SharedGamesOutcome) -> Reply {
    match outcome {
        SharedGamesOutcome::Picked(game) => Reply::Card(
            Card::new(game.name.clone(), "Here's your randomly chosen game, enjoy!")
                .with_image(game.header.clone()),
        ),
        SharedGamesOutcome::BotMember => Reply::text("A bot was detected as a user."),
        SharedGamesOutcome::DuplicateMembers => Reply::text("Duplicate users detected."),
        SharedGamesOutcome::Unlinked(members) => {
            let names = members
                .iter()
                .map(|member| member.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Reply::text(format!(
                "These users haven't added their SteamID:\n```{names}```"
            ))
        }
        SharedGamesOutcome::NoSharedMultiplayer => {
            Reply::text("There are no shared multiplayer games between these users.")
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

    fn user(id: &str, name: &str) -> ChatUser {
        ChatUser {
            id: id.into(),
            name: name.into(),
            is_bot: false,
        }
    }

    fn bot(id: &str) -> ChatUser {
        ChatUser {
            id: id.into(),
            name: "beep".into(),
            is_bot: true,
        }
    }

    fn sets(groups: &[&[u32]]) -> Vec<HashSet<u32>> {
        groups
            .iter()
            .map(|group| group.iter().copied().collect())
            .collect()
    }

    #[test]
    fn test_intersect_all_conventions() {
        assert!(intersect_all(Vec::new()).is_empty());

        let single = intersect_all(sets(&[&[10, 20, 30]]));
        let expected: HashSet<u32> = [10, 20, 30].into_iter().collect();
        assert_eq!(single, expected);

        let pair = intersect_all(sets(&[&[10, 20, 30], &[20, 30, 40]]));
        let expected: HashSet<u32> = [20, 30].into_iter().collect();
        assert_eq!(pair, expected);

        let disjoint = intersect_all(sets(&[&[10], &[20]]));
        assert!(disjoint.is_empty());
    }

    #[tokio::test]
    async fn test_bot_member_rejected_before_store_access() {
        let db = Database::open_in_memory().unwrap();
        let outcome = resolve_shared_game(&db, &test_client(), &[user("1", "alice"), bot("2")])
            .await
            .unwrap();
        assert_eq!(outcome, SharedGamesOutcome::BotMember);
    }

    #[tokio::test]
    async fn test_duplicate_members_rejected() {
        let db = Database::open_in_memory().unwrap();
        let outcome = resolve_shared_game(
            &db,
            &test_client(),
            &[user("1", "alice"), user("1", "alice")],
        )
        .await
        .unwrap();
        assert_eq!(outcome, SharedGamesOutcome::DuplicateMembers);
    }

    #[tokio::test]
    async fn test_unlinked_members_reported_exactly() {
        let db = Database::open_in_memory().unwrap();
        db.ensure_user_exists("1", "alice").unwrap();
        db.ensure_user_exists("2", "bob").unwrap();
        db.ensure_user_exists("3", "carol").unwrap();
        db.set_steam_id("1", "76561197960287930").unwrap();

        let outcome = resolve_shared_game(
            &db,
            &test_client(),
            &[user("1", "alice"), user("2", "bob"), user("3", "carol")],
        )
        .await
        .unwrap();
        assert_eq!(
            outcome,
            SharedGamesOutcome::Unlinked(vec![user("2", "bob"), user("3", "carol")])
        );
    }

    #[tokio::test]
    async fn test_shared_pick_from_warm_cache() {
        // A owns {10, 20, 30}, B owns {20, 30, 40}; 20 is the only shared
        // multiplayer title, so the pick is forced.
        let db = Database::open_in_memory().unwrap();
        db.ensure_user_exists("1", "alice").unwrap();
        db.ensure_user_exists("2", "bob").unwrap();
        db.set_steam_id("1", "76561197960287930").unwrap();
        db.set_steam_id("2", "76561197960287931").unwrap();
        db.replace_owned_games("76561197960287930", &[10, 20, 30].into_iter().collect())
            .unwrap();
        db.replace_owned_games("76561197960287931", &[20, 30, 40].into_iter().collect())
            .unwrap();

        db.insert_game_info(&GameInfo {
            app_id: 20,
            multiplayer: true,
            name: "Team Fortress Classic".into(),
            header: "https://cdn.example/20.jpg".into(),
        })
        .unwrap();
        db.insert_game_info(&GameInfo {
            app_id: 30,
            multiplayer: false,
            name: "Day of Defeat".into(),
            header: "https://cdn.example/30.jpg".into(),
        })
        .unwrap();

        let outcome =
            resolve_shared_game(&db, &test_client(), &[user("1", "alice"), user("2", "bob")])
                .await
                .unwrap();
        match outcome {
            SharedGamesOutcome::Picked(game) => {
                assert_eq!(game.app_id, 20);
                assert_eq!(game.name, "Team Fortress Classic");
            }
            other => panic!("expected a pick, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_member_uses_own_library() {
        let db = Database::open_in_memory().unwrap();
        db.ensure_user_exists("1", "alice").unwrap();
        db.set_steam_id("1", "76561197960287930").unwrap();
        db.replace_owned_games("76561197960287930", &[20].into_iter().collect())
            .unwrap();
        db.insert_game_info(&GameInfo {
            app_id: 20,
            multiplayer: true,
            name: "Team Fortress Classic".into(),
            header: String::new(),
        })
        .unwrap();

        let outcome = resolve_shared_game(&db, &test_client(), &[user("1", "alice")])
            .await
            .unwrap();
        assert!(matches!(outcome, SharedGamesOutcome::Picked(game) if game.app_id == 20));
    }

    #[tokio::test]
    async fn test_no_shared_multiplayer_is_a_distinct_outcome() {
        let db = Database::open_in_memory().unwrap();
        db.ensure_user_exists("1", "alice").unwrap();
        db.ensure_user_exists("2", "bob").unwrap();
        db.set_steam_id("1", "76561197960287930").unwrap();
        db.set_steam_id("2", "76561197960287931").unwrap();
        db.replace_owned_games("76561197960287930", &[30].into_iter().collect())
            .unwrap();
        db.replace_owned_games("76561197960287931", &[30].into_iter().collect())
            .unwrap();
        db.insert_game_info(&GameInfo {
            app_id: 30,
            multiplayer: false,
            name: "Day of Defeat".into(),
            header: String::new(),
        })
        .unwrap();

        let outcome =
            resolve_shared_game(&db, &test_client(), &[user("1", "alice"), user("2", "bob")])
                .await
                .unwrap();
        assert_eq!(outcome, SharedGamesOutcome::NoSharedMultiplayer);
    }

    #[test]
    fn test_render_unlinked_lists_names() {
        let reply = render_shared_games(&SharedGamesOutcome::Unlinked(vec![
            user("2", "bob"),
            user("3", "carol"),
        ]));
        match reply {
            Reply::Text(text) => {
                assert!(text.contains("bob, carol"));
            }
            Reply::Card(_) => panic!("expected text"),
        }
    }
}
