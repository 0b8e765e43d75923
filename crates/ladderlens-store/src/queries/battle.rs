use rusqlite::{Connection, params};

use crate::Result;
use crate::records::BattleRecord;

pub fn insert_or_update(conn: &Connection, battle: &BattleRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO battles (
            id, player_tag, mode, battle_time, victory, level_diff,
            win_chance, trophy_change, opponent_crowns, player_crowns, deck
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        ON CONFLICT(player_tag, id) DO UPDATE SET
            mode = ?3,
            battle_time = ?4,
            victory = ?5,
            level_diff = ?6,
            win_chance = ?7,
            trophy_change = ?8,
            opponent_crowns = ?9,
            player_crowns = ?10,
            deck = ?11
        "#,
        params![
            &battle.id,
            &battle.player_tag,
            &battle.mode,
            &battle.battle_time,
            &battle.victory,
            &battle.level_diff,
            &battle.win_chance,
            &battle.trophy_change,
            &battle.opponent_crowns,
            &battle.player_crowns,
            &battle.deck
        ],
    )?;

    Ok(())
}

/// All battles for one player in ascending battle_time order - the
/// ordering the engine's reconstruction depends on.
pub fn for_player(conn: &Connection, tag: &str) -> Result<Vec<BattleRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, player_tag, mode, battle_time, victory, level_diff,
               win_chance, trophy_change, opponent_crowns, player_crowns, deck
        FROM battles
        WHERE player_tag = ?1
        ORDER BY battle_time ASC, id ASC
        "#,
    )?;

    let battles = stmt
        .query_map([tag], |row| {
            Ok(BattleRecord {
                id: row.get(0)?,
                player_tag: row.get(1)?,
                mode: row.get(2)?,
                battle_time: row.get(3)?,
                victory: row.get(4)?,
                level_diff: row.get(5)?,
                win_chance: row.get(6)?,
                trophy_change: row.get(7)?,
                opponent_crowns: row.get(8)?,
                player_crowns: row.get(9)?,
                deck: row.get(10)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(battles)
}

pub fn count_for_player(conn: &Connection, tag: &str) -> Result<usize> {
    let count: i64 = conn.query_row(
        r#"
        SELECT COUNT(*)
        FROM battles
        WHERE player_tag = ?1
        "#,
        [tag],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}
