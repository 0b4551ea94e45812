//! Chat-platform identities and membership bootstrap.

use gamenight_db::{Database, DbError};
use serde::{Deserialize, Serialize};

/// A chat-platform identity as handed over by the command layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    pub is_bot: bool,
}

/// Register every human member of a guild, skipping bots and the bot's own
/// identity. Invoked from guild-join and ready events.
pub fn sync_members(
    db: &Database,
    bot_user_id: &str,
    members: &[ChatUser],
) -> Result<(), DbError> {
    for member in members {
        if member.is_bot || member.id == bot_user_id {
            continue;
        }
        db.ensure_user_exists(&member.id, &member.name)?;
    }
    Ok(())
}

/// Register a single newly joined member.
pub fn register_member(db: &Database, member: &ChatUser) -> Result<(), DbError> {
    if member.is_bot {
        return Ok(());
    }
    db.ensure_user_exists(&member.id, &member.name)
}
