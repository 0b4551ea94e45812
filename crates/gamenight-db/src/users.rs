//! Chat-user records and Steam-account linkage storage.

use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub steam_id: Option<String>,
    pub refreshed_at: i64,
}

impl Database {
    /// Register a chat user if unknown. Existing rows are left untouched.
    pub fn ensure_user_exists(&self, user_id: &str, name: &str) -> Result<(), DbError> {
        if user_id.trim().is_empty() {
            return Ok(());
        }
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO users (user_id, name) VALUES (?1, ?2)",
                rusqlite::params![user_id, name],
            )?;
            Ok(())
        })
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, name, steam_id, refreshed_at
                 FROM users
                 WHERE user_id = ?1",
            )?;
            let user = stmt
                .query_row([user_id], |row| {
                    Ok(UserRecord {
                        user_id: row.get(0)?,
                        name: row.get(1)?,
                        steam_id: row.get(2)?,
                        refreshed_at: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
                    })
                })
                .optional()?;
            Ok(user)
        })
    }

    /// True if any user already holds this Steam account.
    pub fn steam_id_in_use(&self, steam_id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE steam_id = ?1 LIMIT 1)",
                [steam_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    /// True if this user already has exactly this Steam account linked.
    pub fn has_same_steam_id(&self, user_id: &str, steam_id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?1 AND steam_id = ?2 LIMIT 1)",
                rusqlite::params![user_id, steam_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    pub fn linked_steam_id(&self, user_id: &str) -> Result<Option<String>, DbError> {
        self.with_conn(|conn| {
            let steam_id = conn
                .query_row(
                    "SELECT steam_id FROM users WHERE user_id = ?1",
                    [user_id],
                    |row| row.get::<_, Option<String>>(0),
                )
                .optional()?;
            Ok(steam_id.flatten())
        })
    }

    /// Link a Steam account to a user. Only the linkage column is written.
    ///
    /// The UNIQUE constraint on `steam_id` is the final arbiter when two
    /// users race for the same account; losing surfaces as
    /// [`DbError::Conflict`].
    pub fn set_steam_id(&self, user_id: &str, steam_id: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE users SET steam_id = ?1 WHERE user_id = ?2",
                rusqlite::params![steam_id, user_id],
            )
            .map_err(map_conflict)?;
            Ok(())
        })
    }
}

fn map_conflict(e: rusqlite::Error) -> DbError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::Conflict("steam_id is already linked to another user".into())
        }
        _ => DbError::Sqlite(e),
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
