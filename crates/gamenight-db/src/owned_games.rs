//! Per-account owned-game set storage.

use std::collections::HashSet;

use crate::{Database, DbError};

impl Database {
    /// Replace the cached owned-game set for a Steam account.
    ///
    /// Delete and insert run in one transaction; a failure mid-write leaves
    /// the previous set intact. The owning user's `refreshed_at` is stamped
    /// in the same transaction.
    pub fn replace_owned_games(
        &self,
        steam_id: &str,
        app_ids: &HashSet<u32>,
    ) -> Result<(), DbError> {
        let now = chrono::Utc::now().timestamp();
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            {
                tx.execute("DELETE FROM owned_games WHERE steam_id = ?1", [steam_id])?;
                let mut stmt =
                    tx.prepare("INSERT INTO owned_games (steam_id, app_id) VALUES (?1, ?2)")?;
                for app_id in app_ids {
                    stmt.execute(rusqlite::params![steam_id, app_id])?;
                }
                tx.execute(
                    "UPDATE users SET refreshed_at = ?1 WHERE steam_id = ?2",
                    rusqlite::params![now, steam_id],
                )?;
            }
            tx.commit()?;
            Ok(())
        })
    }

    /// Cached owned-game set for an account. Unknown accounts yield an
    /// empty set, never an error.
    pub fn get_owned_games(&self, steam_id: &str) -> Result<HashSet<u32>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT app_id FROM owned_games WHERE steam_id = ?1")?;
            let rows = stmt.query_map([steam_id], |row| row.get::<_, u32>(0))?;
            rows.collect::<Result<HashSet<_>, _>>().map_err(Into::into)
        })
    }
}
