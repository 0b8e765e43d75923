//! Fixtures for battle-history generation and dump placement.
//!
//! Provides utilities to:
//! - Build chronological battle sequences with a fluent API
//! - Write player dump files in the format `store import` consumes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use ladderlens_types::{GameMode, RawBattle};

/// Fluent builder for chronological battle sequences.
///
/// Battles are appended with an offset in seconds from a fixed base
/// time; the field setters (`delta`, `matchup`, ...) apply to the most
/// recently appended battle.
///
/// ```
/// use ladderlens_testing::BattleBuilder;
///
/// let battles = BattleBuilder::new()
///     .loss(0).delta(-20)
///     .win(300).delta(25).matchup(0.62)
///     .build();
/// assert_eq!(battles.len(), 2);
/// ```
pub struct BattleBuilder {
    base: DateTime<Utc>,
    battles: Vec<RawBattle>,
}

impl BattleBuilder {
    pub fn new() -> Self {
        // Fixed base keeps fixture output deterministic.
        Self::starting_at(Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap())
    }

    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            battles: Vec::new(),
        }
    }

    /// Append a won battle at `offset_secs` past the base time.
    pub fn win(self, offset_secs: i64) -> Self {
        self.push(offset_secs, true)
    }

    /// Append a lost battle at `offset_secs` past the base time.
    pub fn loss(self, offset_secs: i64) -> Self {
        self.push(offset_secs, false)
    }

    /// Set the stored trophy delta of the last appended battle.
    pub fn delta(mut self, trophy_change: i32) -> Self {
        self.last_mut().trophy_change = Some(trophy_change);
        self
    }

    /// Set the predicted win chance ([0, 1]) of the last appended battle.
    pub fn matchup(mut self, win_chance: f64) -> Self {
        self.last_mut().win_chance = Some(win_chance);
        self
    }

    /// Set the tower-level difference of the last appended battle.
    pub fn level_diff(mut self, diff: i32) -> Self {
        self.last_mut().level_diff = Some(diff);
        self
    }

    /// Set the game mode of the last appended battle.
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.last_mut().mode = mode;
        self
    }

    pub fn build(self) -> Vec<RawBattle> {
        self.battles
    }

    fn push(mut self, offset_secs: i64, victory: bool) -> Self {
        let id = format!("b{:04}", self.battles.len());
        self.battles.push(RawBattle {
            id,
            mode: GameMode::Ladder,
            battle_time: self.base + Duration::seconds(offset_secs),
            victory,
            level_diff: None,
            win_chance: None,
            trophy_change: None,
            opponent_crowns: if victory { 0 } else { 2 },
            player_crowns: if victory { 2 } else { 0 },
            deck: "hog-cycle".to_string(),
        });
        self
    }

    fn last_mut(&mut self) -> &mut RawBattle {
        self.battles
            .last_mut()
            .expect("append a battle before setting its fields")
    }
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a player dump file in the format `store import` consumes.
///
/// Returns the path of the written file.
pub fn write_player_dump(
    dir: &Path,
    tag: &str,
    trophies: i32,
    battles: &[RawBattle],
) -> Result<PathBuf> {
    let dump = serde_json::json!({
        "tag": tag,
        "name": format!("{tag} (fixture)"),
        "trophies": trophies,
        "battles": battles,
    });

    let path = dir.join(format!("{}.json", tag.trim_start_matches('#')));
    fs::write(&path, serde_json::to_string_pretty(&dump)?)?;
    Ok(path)
}
