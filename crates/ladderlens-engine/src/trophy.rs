use std::collections::HashMap;

use ladderlens_types::{RawBattle, TrophyRecord};

/// Reconstruct the trophy balance around every trophy-mode battle.
///
/// The source never stores a per-battle balance, only the player's
/// current total and a per-battle delta, so the balance is rebuilt
/// backward: the most recent trophy battle ends at `current_trophies`,
/// and each earlier battle ends where the next one started.
///
/// The stored delta is corrected *before* the recurrence runs: a loss
/// with a positive delta is a known source artifact at arena trophy
/// gates and counts as 0. A missing delta also counts as 0.
///
/// Battles outside the trophy modes get no entry; an empty trophy
/// history yields an empty map.
pub fn reconstruct_trophies(
    battles: &[RawBattle],
    current_trophies: i32,
) -> HashMap<String, TrophyRecord> {
    let ranked: Vec<&RawBattle> = battles.iter().filter(|b| b.mode.is_trophy_mode()).collect();

    if ranked.is_empty() {
        return HashMap::new();
    }

    let variations: Vec<i32> = ranked.iter().map(|b| corrected_variation(b)).collect();

    // Iterative backward walk into a pre-sized buffer; histories can
    // exceed recursion-safe depths.
    let mut after = vec![0i32; ranked.len()];
    after[ranked.len() - 1] = current_trophies;
    for i in (0..ranked.len() - 1).rev() {
        after[i] = after[i + 1] - variations[i + 1];
    }

    ranked
        .iter()
        .enumerate()
        .map(|(i, battle)| {
            (
                battle.id.clone(),
                TrophyRecord {
                    trophies_after: after[i],
                    variation: variations[i],
                },
            )
        })
        .collect()
}

/// Stored delta with the arena-gate artifact zeroed out.
fn corrected_variation(battle: &RawBattle) -> i32 {
    match battle.trophy_change {
        Some(delta) if !battle.victory && delta > 0 => 0,
        Some(delta) => delta,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ladderlens_types::GameMode;

    fn raw(
        id: &str,
        offset_secs: i64,
        mode: GameMode,
        victory: bool,
        trophy_change: Option<i32>,
    ) -> RawBattle {
        let base = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        RawBattle {
            id: id.to_string(),
            mode,
            battle_time: base + Duration::seconds(offset_secs),
            victory,
            level_diff: None,
            win_chance: None,
            trophy_change,
            opponent_crowns: if victory { 0 } else { 2 },
            player_crowns: if victory { 2 } else { 0 },
            deck: "hog-cycle".to_string(),
        }
    }

    #[test]
    fn test_backward_recurrence() {
        let battles = vec![
            raw("m0", 0, GameMode::Ladder, false, Some(-20)),
            raw("m1", 300, GameMode::Ladder, false, Some(30)),
            raw("m2", 600, GameMode::Ladder, true, Some(25)),
            raw("m3", 900, GameMode::Ladder, false, Some(-15)),
        ];

        let trophies = reconstruct_trophies(&battles, 100);

        assert_eq!(trophies["m3"].trophies_after, 100);
        assert_eq!(trophies["m2"].trophies_after, 115);
        // m1 is a loss with a positive stored delta: corrected to 0, so
        // the balance does not move across it.
        assert_eq!(trophies["m1"].trophies_after, 90);
        assert_eq!(trophies["m1"].variation, 0);
        assert_eq!(trophies["m0"].trophies_after, 90);
        assert_eq!(trophies["m0"].trophies_before(), 110);
    }

    #[test]
    fn test_adjacent_balances_chain() {
        let battles = vec![
            raw("a", 0, GameMode::Ladder, true, Some(31)),
            raw("b", 200, GameMode::Ladder, false, Some(-29)),
            raw("c", 400, GameMode::Ladder, true, Some(28)),
        ];

        let trophies = reconstruct_trophies(&battles, 5000);

        for pair in [("a", "b"), ("b", "c")] {
            let prev = trophies[pair.0];
            let curr = trophies[pair.1];
            assert_eq!(curr.trophies_before(), prev.trophies_after);
        }
    }

    #[test]
    fn test_null_delta_counts_as_zero() {
        let battles = vec![
            raw("a", 0, GameMode::Ladder, true, None),
            raw("b", 200, GameMode::Ladder, true, Some(30)),
        ];

        let trophies = reconstruct_trophies(&battles, 1000);

        assert_eq!(trophies["a"].variation, 0);
        assert_eq!(trophies["a"].trophies_after, 970);
    }

    #[test]
    fn test_non_trophy_modes_excluded() {
        let battles = vec![
            raw("a", 0, GameMode::Ladder, true, Some(30)),
            raw("ch", 100, GameMode::Other("Challenge".into()), true, None),
            raw("b", 200, GameMode::Ranked, false, Some(-20)),
        ];

        let trophies = reconstruct_trophies(&battles, 2000);

        assert_eq!(trophies.len(), 2);
        assert!(!trophies.contains_key("ch"));
        // "a" and "b" are adjacent within the trophy subset.
        assert_eq!(trophies["b"].trophies_after, 2000);
        assert_eq!(trophies["a"].trophies_after, 2020);
    }

    #[test]
    fn test_empty_history_yields_empty_map() {
        assert!(reconstruct_trophies(&[], 3000).is_empty());

        let challenge_only = vec![raw("ch", 0, GameMode::Other("Challenge".into()), true, None)];
        assert!(reconstruct_trophies(&challenge_only, 3000).is_empty());
    }

    #[test]
    fn test_win_with_positive_delta_kept() {
        let battles = vec![
            raw("a", 0, GameMode::Ladder, true, Some(30)),
            raw("b", 200, GameMode::Ladder, true, Some(29)),
        ];

        let trophies = reconstruct_trophies(&battles, 4000);

        assert_eq!(trophies["b"].variation, 29);
        assert_eq!(trophies["a"].variation, 30);
        assert_eq!(trophies["a"].trophies_after, 3971);
    }
}
