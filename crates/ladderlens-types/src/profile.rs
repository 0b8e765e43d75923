use serde::{Deserialize, Serialize};

use crate::Session;

/// Per-player behavioral profile aggregated over all sessions.
///
/// Produced by one pipeline run; read-only to every consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Battles across all sessions (after mode filtering).
    pub tot_battles: usize,
    pub n_sessions: usize,
    /// Frustration Sensitivity Index: mean weighted inverse-stress quit
    /// signal over all losses. Higher means the player stops playing
    /// after less accumulated stress. Always finite and non-negative.
    pub fsi: f64,
    /// Engagement Resilience Score: `quit_impulsivity * exp(-fsi)`.
    pub ers: f64,
    /// Mean quit signal over the recorded sensitivity samples.
    pub quit_impulsivity: f64,
    /// Mean active session length in minutes.
    pub avg_session_min: f64,
    pub matches_per_session: f64,
    /// Longest run of consecutive losses the player sat through.
    pub max_loss_streak: u32,
    /// Share of wins followed by another battle in the same session.
    pub win_continuation_rate: f64,
    /// Share of losses followed by another battle in the same session.
    pub loss_continuation_rate: f64,
    /// Share of losses continued while on a loss or counter streak.
    pub streak_continuation_rate: f64,
    /// Mean matchup percentage across battles with a known matchup;
    /// 50.0 when none is known.
    pub avg_matchup_pct: f64,
    /// Whether the sample is large enough for downstream tests. A flag,
    /// not a filter: exclusion is the caller's call.
    pub is_reliable: bool,
}

/// Full reconstruction output for one player.
///
/// Created fresh on every pipeline run, purely derived from the input
/// battle rows; consumers never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSessions {
    pub tag: String,
    /// Chronologically contiguous, gap-exclusive sessions.
    pub sessions: Vec<Session>,
    /// Absent only when the player has zero sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PlayerProfile>,
    /// Convenience copy of `profile.fsi`; 0.0 without a profile.
    pub fsi: f64,
}
