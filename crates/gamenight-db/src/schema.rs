//! Database schema definitions and migrations.

use rusqlite::Connection;

use crate::DbError;

pub fn run_migrations(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(SCHEMA)?;
    migrate_users_add_refreshed_at(conn)?;
    Ok(())
}

/// users created before library refresh tracking lack the column.
fn migrate_users_add_refreshed_at(conn: &Connection) -> Result<(), DbError> {
    if column_exists(conn, "users", "refreshed_at")? {
        return Ok(());
    }
    tracing::info!("Adding refreshed_at column to users");
    conn.execute_batch("ALTER TABLE users ADD COLUMN refreshed_at INTEGER NOT NULL DEFAULT 0;")?;
    Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, DbError> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let exists = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .any(|name| name.as_deref() == Ok(column));
    Ok(exists)
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    steam_id TEXT UNIQUE,
    refreshed_at INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS owned_games (
    steam_id TEXT NOT NULL,
    app_id INTEGER NOT NULL,
    PRIMARY KEY (steam_id, app_id)
);

CREATE TABLE IF NOT EXISTS game_info (
    app_id INTEGER PRIMARY KEY,
    multiplayer BOOLEAN NOT NULL DEFAULT false,
    name TEXT NOT NULL,
    header TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;
