//! Per-game multiplayer classification cache.

use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub app_id: u32,
    pub multiplayer: bool,
    pub name: String,
    pub header: String,
}

impl Database {
    pub fn get_game_info(&self, app_id: u32) -> Result<Option<GameInfo>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT app_id, multiplayer, name, header
                 FROM game_info
                 WHERE app_id = ?1",
            )?;
            let info = stmt
                .query_row([app_id], |row| {
                    Ok(GameInfo {
                        app_id: row.get(0)?,
                        multiplayer: row.get(1)?,
                        name: row.get(2)?,
                        header: row.get(3)?,
                    })
                })
                .optional()?;
            Ok(info)
        })
    }

    /// Persist a classification. Rows are written once and never updated;
    /// returns false when the app_id was already cached.
    pub fn insert_game_info(&self, info: &GameInfo) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO game_info (app_id, multiplayer, name, header)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![info.app_id, info.multiplayer, info.name, info.header],
            )?;
            Ok(changed > 0)
        })
    }
}

trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
