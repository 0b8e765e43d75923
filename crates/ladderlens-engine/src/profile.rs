use ladderlens_types::{PlayerProfile, Session, StopType};

use crate::analysis::MATCHUP_MIDPOINT;

/// Matchup below which a loss counts as being countered.
const COUNTER_MATCHUP: f64 = 45.0;
/// Matchup below which a loss counts as being hard-countered.
const HARD_COUNTER_MATCHUP: f64 = 35.0;
/// Stress relief per consecutive win.
const WIN_RELIEF: f64 = 2.0;
/// Battle count a profile must exceed to be considered reliable.
const RELIABLE_MIN_BATTLES: usize = 50;
/// Matches-per-session floor a reliable profile must exceed.
const RELIABLE_MIN_DENSITY: f64 = 2.0;

/// Running streak and stress counters threaded through the session walk.
///
/// State persists across session boundaries within one player and is
/// rebuilt from scratch for every player.
#[derive(Debug, Default)]
struct StreakState {
    loss_streak: u32,
    win_streak: u32,
    /// Consecutive losses at a countered matchup.
    counter_streak: u32,
    /// Accumulated frustration; never below 0, uncapped above.
    stress: f64,
}

/// Tallies accumulated over the whole walk.
#[derive(Debug, Default)]
struct WalkTotals {
    wins: usize,
    losses: usize,
    win_continuations: usize,
    loss_continuations: usize,
    streak_continuations: usize,
    max_loss_streak: u32,
    /// One `weight / stress` sample per weighted session-ending loss.
    sensitivity_samples: Vec<f64>,
    matchup_sum: f64,
    matchup_count: usize,
}

/// Walk every session in order and derive the player's profile.
///
/// Returns `None` for an empty session list; that is the only case
/// without a profile.
pub fn build_profile(sessions: &[Session]) -> Option<PlayerProfile> {
    if sessions.is_empty() {
        return None;
    }

    let mut state = StreakState::default();
    let mut totals = WalkTotals::default();

    for session in sessions {
        let last_index = session.battles.len().saturating_sub(1);
        for (i, battle) in session.battles.iter().enumerate() {
            let is_last = i == last_index;

            if let Some(m) = battle.matchup {
                totals.matchup_sum += m;
                totals.matchup_count += 1;
            }

            if battle.victory() {
                record_win(&mut state, &mut totals, is_last);
            } else {
                record_loss(
                    &mut state,
                    &mut totals,
                    battle.matchup,
                    is_last,
                    session.stop_type,
                );
            }
        }
    }

    let tot_battles: usize = sessions.iter().map(|s| s.battles.len()).sum();
    let n_sessions = sessions.len();

    let sample_sum: f64 = totals.sensitivity_samples.iter().sum();
    let fsi = ratio(sample_sum, totals.losses as f64);
    let quit_impulsivity = ratio(sample_sum, totals.sensitivity_samples.len() as f64);
    let ers = quit_impulsivity * (-fsi).exp();

    let matches_per_session = tot_battles as f64 / n_sessions as f64;
    let avg_session_min =
        sessions.iter().map(Session::play_minutes).sum::<f64>() / n_sessions as f64;

    let avg_matchup_pct = if totals.matchup_count == 0 {
        MATCHUP_MIDPOINT
    } else {
        totals.matchup_sum / totals.matchup_count as f64
    };

    Some(PlayerProfile {
        tot_battles,
        n_sessions,
        fsi,
        ers,
        quit_impulsivity,
        avg_session_min,
        matches_per_session,
        max_loss_streak: totals.max_loss_streak,
        win_continuation_rate: ratio(totals.win_continuations as f64, totals.wins as f64),
        loss_continuation_rate: ratio(totals.loss_continuations as f64, totals.losses as f64),
        streak_continuation_rate: ratio(totals.streak_continuations as f64, totals.losses as f64),
        avg_matchup_pct,
        is_reliable: tot_battles > RELIABLE_MIN_BATTLES
            && matches_per_session > RELIABLE_MIN_DENSITY,
    })
}

fn record_win(state: &mut StreakState, totals: &mut WalkTotals, is_last: bool) {
    state.loss_streak = 0;
    state.counter_streak = 0;
    state.win_streak += 1;
    state.stress = (state.stress - WIN_RELIEF * f64::from(state.win_streak)).max(0.0);

    totals.wins += 1;
    if !is_last {
        totals.win_continuations += 1;
    }
}

fn record_loss(
    state: &mut StreakState,
    totals: &mut WalkTotals,
    matchup: Option<f64>,
    is_last: bool,
    stop_type: StopType,
) {
    state.win_streak = 0;
    state.loss_streak += 1;
    totals.max_loss_streak = totals.max_loss_streak.max(state.loss_streak);

    // An unknown matchup counts as not countered.
    let countered = matchup.is_some_and(|m| m < COUNTER_MATCHUP);
    let hard_countered = matchup.is_some_and(|m| m < HARD_COUNTER_MATCHUP);

    let mut battle_stress = 1.0;
    if countered {
        battle_stress += 0.5;
    }
    if hard_countered {
        battle_stress += 0.5;
    }

    if countered {
        state.counter_streak += 1;
    } else {
        state.counter_streak = 0;
    }
    state.stress += battle_stress;

    totals.losses += 1;
    if is_last {
        // The loss that closes a session is the quit signal. Weight it
        // by how hard the following break was and by how little stress
        // it took to get there. This loss alone put at least 1.0 on the
        // stress counter, so the division is safe.
        let weight = stop_type.weight();
        if weight != 0.0 {
            totals.sensitivity_samples.push(weight / state.stress);
        }
    } else {
        totals.loss_continuations += 1;
        if state.loss_streak >= 2 || state.counter_streak >= 2 {
            totals.streak_continuations += 1;
        }
    }
}

/// Safe division defaulting to 0.0; rates must never go NaN.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
