use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game mode tag attached to every battle row.
///
/// The scraper records modes as free-form strings; only the two
/// trophy-bearing modes are distinguished here. Everything else
/// (challenges, tournaments, 2v2, ...) is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameMode {
    /// Trophy-road ladder battles.
    Ladder,
    /// Ranked (path-of-legends style) battles.
    Ranked,
    /// Any other mode, kept as scraped.
    Other(String),
}

impl GameMode {
    /// Whether battles in this mode move the player's trophy balance.
    pub fn is_trophy_mode(&self) -> bool {
        matches!(self, GameMode::Ladder | GameMode::Ranked)
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameMode::Ladder => "Ladder",
            GameMode::Ranked => "Ranked",
            GameMode::Other(name) => name,
        }
    }
}

impl From<String> for GameMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ladder" => GameMode::Ladder,
            "Ranked" => GameMode::Ranked,
            _ => GameMode::Other(value),
        }
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Battle-mode filter applied before session segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeFilter {
    #[default]
    All,
    Ladder,
    Ranked,
    /// Both trophy-bearing modes together.
    LadderRanked,
}

impl ModeFilter {
    pub fn accepts(&self, mode: &GameMode) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Ladder => matches!(mode, GameMode::Ladder),
            ModeFilter::Ranked => matches!(mode, GameMode::Ranked),
            ModeFilter::LadderRanked => mode.is_trophy_mode(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeFilter::All => "all",
            ModeFilter::Ladder => "ladder",
            ModeFilter::Ranked => "ranked",
            ModeFilter::LadderRanked => "ladder_ranked",
        }
    }
}

impl fmt::Display for ModeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One battle row as delivered by the data-acquisition layer.
///
/// Rows for one player arrive in ascending `battle_time` order; the
/// engine depends on that ordering and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBattle {
    /// Battle identifier, unique within one player's history.
    pub id: String,
    /// Game mode tag.
    pub mode: GameMode,
    /// Battle start time (UTC).
    pub battle_time: DateTime<Utc>,
    /// Whether the player won.
    pub victory: bool,
    /// Player tower level minus opponent tower level, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_diff: Option<i32>,
    /// Predicted win probability for the deck pairing, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_chance: Option<f64>,
    /// Signed trophy delta as stored by the source, when present.
    ///
    /// Known to be dirty: losses near arena trophy gates can carry a
    /// spurious positive delta. The engine corrects this during
    /// reconstruction; nothing else should trust the raw value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trophy_change: Option<i32>,
    /// Crowns taken by the opponent.
    pub opponent_crowns: u32,
    /// Crowns taken by the player.
    pub player_crowns: u32,
    /// Deck archetype identifier.
    pub deck: String,
}
