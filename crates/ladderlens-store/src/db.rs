use std::path::Path;

use rusqlite::Connection;

use ladderlens_types::RawBattle;

use crate::records::{BattleRecord, PlayerRecord};
use crate::{Result, queries, schema};

/// Handle to the battle store.
///
/// Owns the SQLite connection; all access goes through the typed
/// methods below. Opening runs the schema migration.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn upsert_player(&self, player: &PlayerRecord) -> Result<()> {
        queries::player::insert_or_update(&self.conn, player)
    }

    pub fn get_player(&self, tag: &str) -> Result<Option<PlayerRecord>> {
        queries::player::get(&self.conn, tag)
    }

    /// Players ordered by trophies, highest first.
    pub fn list_players(&self, limit: Option<usize>) -> Result<Vec<PlayerRecord>> {
        queries::player::list(&self.conn, limit)
    }

    /// Upsert a batch of battle rows in one transaction.
    pub fn insert_battles(&mut self, battles: &[BattleRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for battle in battles {
            queries::battle::insert_or_update(&tx, battle)?;
        }
        tx.commit()?;
        Ok(battles.len())
    }

    /// One player's battles in ascending battle_time order, converted
    /// back to engine input rows.
    pub fn load_player_battles(&self, tag: &str) -> Result<Vec<RawBattle>> {
        queries::battle::for_player(&self.conn, tag)?
            .into_iter()
            .map(BattleRecord::into_raw)
            .collect()
    }

    pub fn count_battles_for_player(&self, tag: &str) -> Result<usize> {
        queries::battle::count_for_player(&self.conn, tag)
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute("VACUUM", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladderlens_testing::BattleBuilder;

    fn player(tag: &str, trophies: i32) -> PlayerRecord {
        PlayerRecord {
            tag: tag.to_string(),
            name: Some(format!("{tag} name")),
            trophies,
            nationality: Some("it".to_string()),
            last_seen_at: Some("2026-02-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();

        let players = db.list_players(None).unwrap();
        assert_eq!(players.len(), 0);
    }

    #[test]
    fn test_upsert_player() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_player(&player("#P1", 4000)).unwrap();

        let retrieved = db.get_player("#P1").unwrap().unwrap();
        assert_eq!(retrieved.tag, "#P1");
        assert_eq!(retrieved.trophies, 4000);

        // A fresh scrape updates the trophy anchor in place.
        db.upsert_player(&player("#P1", 4100)).unwrap();
        let updated = db.get_player("#P1").unwrap().unwrap();
        assert_eq!(updated.trophies, 4100);

        assert_eq!(db.list_players(None).unwrap().len(), 1);
    }

    #[test]
    fn test_list_players_orders_by_trophies() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_player(&player("#LOW", 3000)).unwrap();
        db.upsert_player(&player("#HIGH", 6000)).unwrap();
        db.upsert_player(&player("#MID", 4500)).unwrap();

        let players = db.list_players(None).unwrap();
        let tags: Vec<&str> = players.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, vec!["#HIGH", "#MID", "#LOW"]);

        let limited = db.list_players(Some(2)).unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_battles_come_back_in_chronological_order() {
        let mut db = Database::open_in_memory().unwrap();
        db.upsert_player(&player("#P1", 4000)).unwrap();

        let battles = BattleBuilder::new().win(600).loss(0).win(1200).build();
        let records: Vec<BattleRecord> = battles
            .iter()
            .map(|b| BattleRecord::from_raw("#P1", b))
            .collect();
        db.insert_battles(&records).unwrap();

        let loaded = db.load_player_battles("#P1").unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.windows(2).all(|w| w[0].battle_time <= w[1].battle_time));
    }

    #[test]
    fn test_reimport_is_an_upsert() {
        let mut db = Database::open_in_memory().unwrap();
        db.upsert_player(&player("#P1", 4000)).unwrap();

        let battles = BattleBuilder::new().win(0).loss(300).build();
        let records: Vec<BattleRecord> = battles
            .iter()
            .map(|b| BattleRecord::from_raw("#P1", b))
            .collect();

        db.insert_battles(&records).unwrap();
        db.insert_battles(&records).unwrap();

        assert_eq!(db.count_battles_for_player("#P1").unwrap(), 2);
    }

    #[test]
    fn test_same_battle_id_for_two_players() {
        let mut db = Database::open_in_memory().unwrap();
        db.upsert_player(&player("#A", 4000)).unwrap();
        db.upsert_player(&player("#B", 4000)).unwrap();

        let battles = BattleBuilder::new().win(0).build();
        let a: Vec<BattleRecord> = battles
            .iter()
            .map(|b| BattleRecord::from_raw("#A", b))
            .collect();
        let b: Vec<BattleRecord> = battles
            .iter()
            .map(|b| BattleRecord::from_raw("#B", b))
            .collect();

        db.insert_battles(&a).unwrap();
        db.insert_battles(&b).unwrap();

        assert_eq!(db.count_battles_for_player("#A").unwrap(), 1);
        assert_eq!(db.count_battles_for_player("#B").unwrap(), 1);
    }

    #[test]
    fn test_missing_player_loads_empty() {
        let db = Database::open_in_memory().unwrap();

        assert!(db.get_player("#NOPE").unwrap().is_none());
        assert!(db.load_player_battles("#NOPE").unwrap().is_empty());
    }
}
