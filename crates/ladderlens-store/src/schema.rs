use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Storage Design Rationale
//
// Why RFC 3339 TEXT timestamps?
// - Lexicographic order equals chronological order, so the chronological
//   read the engine depends on is a plain ORDER BY
// - Readable in any sqlite shell without conversion helpers
//
// Why (player_tag, id) as the battle key?
// - Battle ids are scraped per player; both participants of one match
//   can surface the same id in their own logs
// - Re-importing a fresh dump for a player must be an upsert, not a
//   constraint failure: dumps overlap on every scrape

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            tag TEXT PRIMARY KEY,
            name TEXT,
            trophies INTEGER NOT NULL,
            nationality TEXT,
            last_seen_at TEXT
        );

        CREATE TABLE IF NOT EXISTS battles (
            id TEXT NOT NULL,
            player_tag TEXT NOT NULL,
            mode TEXT NOT NULL,
            battle_time TEXT NOT NULL,
            victory INTEGER NOT NULL,
            level_diff INTEGER,
            win_chance REAL,
            trophy_change INTEGER,
            opponent_crowns INTEGER NOT NULL,
            player_crowns INTEGER NOT NULL,
            deck TEXT NOT NULL,
            PRIMARY KEY (player_tag, id),
            FOREIGN KEY (player_tag) REFERENCES players(tag)
        );

        CREATE INDEX IF NOT EXISTS idx_battles_player_time
            ON battles(player_tag, battle_time ASC);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS battles;
        DROP TABLE IF EXISTS players;
        "#,
    )?;
    Ok(())
}
