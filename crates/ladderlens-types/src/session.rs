use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RawBattle;

// ==========================================
// 1. Trophy reconstruction output
// ==========================================

/// Reconstructed trophy state around one trophy-mode battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrophyRecord {
    /// Trophy balance immediately after the battle.
    pub trophies_after: i32,
    /// Corrected trophy delta. Never positive on a loss.
    pub variation: i32,
}

impl TrophyRecord {
    /// Trophy balance immediately before the battle.
    pub fn trophies_before(&self) -> i32 {
        self.trophies_after - self.variation
    }
}

// ==========================================
// 2. Enriched battle
// ==========================================

/// A battle row plus derived fields. Immutable once created.
///
/// Trophy fields are present only for trophy-mode battles; `matchup` is
/// the win probability rescaled to 0-100, present only when the pairing
/// predictor supplied a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBattle {
    #[serde(flatten)]
    pub battle: RawBattle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trophies_before: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trophies_after: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchup: Option<f64>,
}

impl EnrichedBattle {
    /// Battle start time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.battle.battle_time
    }

    /// Whether the player won.
    pub fn victory(&self) -> bool {
        self.battle.victory
    }
}

// ==========================================
// 3. Session
// ==========================================

/// Classification of the inactivity gap that follows a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    /// Gap of at least 20 minutes but under 2 hours.
    Short,
    /// Gap of at least 2 hours but under 20 hours.
    Long,
    /// Gap of at least 20 hours.
    Quit,
    /// Last session on record; no gap follows.
    End,
}

impl StopType {
    /// Weight of this stop as a quit signal.
    pub fn weight(&self) -> f64 {
        match self {
            StopType::Short => 1.0,
            StopType::Long => 2.5,
            StopType::Quit => 5.0,
            StopType::End => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StopType::Short => "short",
            StopType::Long => "long",
            StopType::Quit => "quit",
            StopType::End => "end",
        }
    }
}

impl std::fmt::Display for StopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of battles with no inter-battle gap of 20 minutes or
/// more, in chronological order.
///
/// Sessions exactly partition the (filtered) battle list: every battle
/// lands in exactly one session, in its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Battles in chronological order; never empty.
    pub battles: Vec<EnrichedBattle>,
    /// Classification of the gap that ended this session.
    pub stop_type: StopType,
    /// Length of that gap in seconds; absent for the final session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Aggregate statistics, computed when the session is closed.
    pub analysis: SessionAnalysis,
}

impl Session {
    /// Time of the first battle.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.battles.first().map(EnrichedBattle::timestamp)
    }

    /// Time of the last battle.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.battles.last().map(EnrichedBattle::timestamp)
    }

    /// Active play time in minutes, first battle to last battle.
    ///
    /// A single-battle session has a play time of zero.
    pub fn play_minutes(&self) -> f64 {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => (end - start).num_seconds() as f64 / 60.0,
            _ => 0.0,
        }
    }
}

// ==========================================
// 4. Session analysis
// ==========================================

/// Aggregate statistics for one session.
///
/// Matchup-derived fields run over battles with a known matchup only.
/// `avg_level_diff` intentionally divides by `tot_battles`, with unknown
/// level-diffs contributing 0 - downstream consumers expect exactly that
/// divisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalysis {
    /// Every battle in the session, matchup known or not.
    pub tot_battles: usize,
    /// Mean matchup on the 0-100 scale; 50.0 when no matchup is known.
    pub avg_matchup: f64,
    /// Population standard deviation of the known matchups.
    pub matchup_std: f64,
    pub avg_level_diff: f64,
    /// Battles with matchup above 80 or below 40.
    pub n_extreme_matchup: usize,
    pub win_rate: f64,
    /// Win rate over battles with matchup below 40; 0 when there are none.
    pub win_rate_unfavorable: f64,
    /// Loss rate over battles with matchup above 80; 0 when there are none.
    pub loss_rate_favorable: f64,
}
