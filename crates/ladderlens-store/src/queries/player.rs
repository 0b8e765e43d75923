use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;
use crate::records::PlayerRecord;

pub fn insert_or_update(conn: &Connection, player: &PlayerRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO players (tag, name, trophies, nationality, last_seen_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(tag) DO UPDATE SET
            name = COALESCE(?2, name),
            trophies = ?3,
            nationality = COALESCE(?4, nationality),
            last_seen_at = ?5
        "#,
        params![
            &player.tag,
            &player.name,
            &player.trophies,
            &player.nationality,
            &player.last_seen_at
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, tag: &str) -> Result<Option<PlayerRecord>> {
    let result = conn
        .query_row(
            r#"
            SELECT tag, name, trophies, nationality, last_seen_at
            FROM players
            WHERE tag = ?1
            "#,
            [tag],
            |row| {
                Ok(PlayerRecord {
                    tag: row.get(0)?,
                    name: row.get(1)?,
                    trophies: row.get(2)?,
                    nationality: row.get(3)?,
                    last_seen_at: row.get(4)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

pub fn list(conn: &Connection, limit: Option<usize>) -> Result<Vec<PlayerRecord>> {
    // SQLite treats a negative LIMIT as "no limit".
    let limit = limit.map(|n| n as i64).unwrap_or(-1);

    let mut stmt = conn.prepare(
        r#"
        SELECT tag, name, trophies, nationality, last_seen_at
        FROM players
        ORDER BY trophies DESC, tag
        LIMIT ?1
        "#,
    )?;

    let players = stmt
        .query_map([limit], |row| {
            Ok(PlayerRecord {
                tag: row.get(0)?,
                name: row.get(1)?,
                trophies: row.get(2)?,
                nationality: row.get(3)?,
                last_seen_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(players)
}
