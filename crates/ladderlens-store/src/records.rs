use chrono::{DateTime, SecondsFormat, Utc};
use ladderlens_types::{GameMode, RawBattle};

use crate::{Error, Result};

/// Player row from the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    /// Player tag as scraped (with the leading '#').
    pub tag: String,
    /// Display name, if the dump carried one.
    pub name: Option<String>,
    /// Current trophy balance - the anchor for backward reconstruction.
    pub trophies: i32,
    /// Two-letter locale code, stored for external tooling; never
    /// interpreted here.
    pub nationality: Option<String>,
    /// Last time a dump for this player was imported (RFC 3339).
    pub last_seen_at: Option<String>,
}

/// Battle row as stored.
///
/// Timestamps are RFC 3339 UTC text so that lexicographic order matches
/// chronological order.
#[derive(Debug, Clone)]
pub struct BattleRecord {
    pub id: String,
    pub player_tag: String,
    pub mode: String,
    pub battle_time: String,
    pub victory: bool,
    pub level_diff: Option<i32>,
    pub win_chance: Option<f64>,
    pub trophy_change: Option<i32>,
    pub opponent_crowns: u32,
    pub player_crowns: u32,
    pub deck: String,
}

impl BattleRecord {
    pub fn from_raw(player_tag: &str, battle: &RawBattle) -> Self {
        Self {
            id: battle.id.clone(),
            player_tag: player_tag.to_string(),
            mode: battle.mode.as_str().to_string(),
            battle_time: battle
                .battle_time
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            victory: battle.victory,
            level_diff: battle.level_diff,
            win_chance: battle.win_chance,
            trophy_change: battle.trophy_change,
            opponent_crowns: battle.opponent_crowns,
            player_crowns: battle.player_crowns,
            deck: battle.deck.clone(),
        }
    }

    pub fn into_raw(self) -> Result<RawBattle> {
        let battle_time = DateTime::parse_from_rfc3339(&self.battle_time)
            .map_err(|e| Error::Data(format!("bad battle_time for battle {}: {}", self.id, e)))?
            .with_timezone(&Utc);

        Ok(RawBattle {
            id: self.id,
            mode: GameMode::from(self.mode),
            battle_time,
            victory: self.victory,
            level_diff: self.level_diff,
            win_chance: self.win_chance,
            trophy_change: self.trophy_change,
            opponent_crowns: self.opponent_crowns,
            player_crowns: self.player_crowns,
            deck: self.deck,
        })
    }
}
