use ladderlens_types::{EnrichedBattle, SessionAnalysis};

/// Matchup above which a pairing counts as extreme-favorable.
const EXTREME_HIGH: f64 = 80.0;
/// Matchup below which a pairing counts as extreme-unfavorable.
const EXTREME_LOW: f64 = 40.0;
/// Neutral matchup used when nothing is known.
pub(crate) const MATCHUP_MIDPOINT: f64 = 50.0;

/// Compute aggregate statistics for one session's battles.
///
/// Matchup statistics run over battles with a known matchup only.
/// `avg_level_diff` divides by the full battle count with unknown
/// level-diffs contributing 0; several downstream consumers depend on
/// exactly that divisor, so the asymmetry stays.
pub fn analyze_session(battles: &[EnrichedBattle]) -> SessionAnalysis {
    let tot_battles = battles.len();

    let matchups: Vec<f64> = battles.iter().filter_map(|b| b.matchup).collect();

    let avg_matchup = if matchups.is_empty() {
        MATCHUP_MIDPOINT
    } else {
        mean(&matchups)
    };
    let matchup_std = std_dev(&matchups, avg_matchup);

    let level_diff_sum: i64 = battles
        .iter()
        .map(|b| i64::from(b.battle.level_diff.unwrap_or(0)))
        .sum();
    let avg_level_diff = if tot_battles == 0 {
        0.0
    } else {
        level_diff_sum as f64 / tot_battles as f64
    };

    let n_extreme_matchup = matchups
        .iter()
        .filter(|&&m| m > EXTREME_HIGH || m < EXTREME_LOW)
        .count();

    let wins = battles.iter().filter(|b| b.victory()).count();
    let win_rate = rate(wins, tot_battles);

    let unfavorable: Vec<&EnrichedBattle> = battles
        .iter()
        .filter(|b| b.matchup.is_some_and(|m| m < EXTREME_LOW))
        .collect();
    let unfavorable_wins = unfavorable.iter().filter(|b| b.victory()).count();
    let win_rate_unfavorable = rate(unfavorable_wins, unfavorable.len());

    let favorable: Vec<&EnrichedBattle> = battles
        .iter()
        .filter(|b| b.matchup.is_some_and(|m| m > EXTREME_HIGH))
        .collect();
    let favorable_losses = favorable.iter().filter(|b| !b.victory()).count();
    let loss_rate_favorable = rate(favorable_losses, favorable.len());

    SessionAnalysis {
        tot_battles,
        avg_matchup,
        matchup_std,
        avg_level_diff,
        n_extreme_matchup,
        win_rate,
        win_rate_unfavorable,
        loss_rate_favorable,
    }
}

/// Count over total, 0.0 for an empty population. Keeps NaN out of
/// downstream correlation tests.
fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a precomputed mean.
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
