// Engine - the reconstruction pipeline
// Sits between stored battle rows and CLI/export presentation.
//
// Stages run strictly in order for one player: trophy reconstruction
// needs the whole history at once (it walks backward), segmentation
// closes each session before the profiler reads its analysis. Players
// are independent of each other; nothing here is shared between them.

mod analysis;
mod profile;
mod segment;
mod trophy;

pub use analysis::analyze_session;
pub use profile::build_profile;
pub use segment::{LONG_STOP_SECS, QUIT_STOP_SECS, SHORT_STOP_SECS, segment_sessions};
pub use trophy::reconstruct_trophies;

use std::collections::HashMap;

use ladderlens_types::{EnrichedBattle, ModeFilter, PlayerSessions, RawBattle, TrophyRecord};

/// Run the full reconstruction pipeline for one player.
///
/// `battles` must be in ascending `battle_time` order - the store
/// guarantees this and the engine never re-sorts. `current_trophies` is
/// the player's trophy balance *now*, the anchor the trophy history is
/// rebuilt backward from.
///
/// A player with no battles under `filter` yields empty sessions and no
/// profile; that is a data condition, not an error.
pub fn build_player_sessions(
    tag: &str,
    battles: &[RawBattle],
    current_trophies: i32,
    filter: ModeFilter,
) -> PlayerSessions {
    let trophies = reconstruct_trophies(battles, current_trophies);
    let enriched = enrich_battles(battles, &trophies);

    let filtered: Vec<EnrichedBattle> = enriched
        .into_iter()
        .filter(|b| filter.accepts(&b.battle.mode))
        .collect();

    let sessions = segment_sessions(filtered);
    let profile = build_profile(&sessions);
    let fsi = profile.as_ref().map(|p| p.fsi).unwrap_or(0.0);

    PlayerSessions {
        tag: tag.to_string(),
        sessions,
        profile,
        fsi,
    }
}

/// Attach reconstructed trophy state and the 0-100 matchup scale to each
/// battle row. Battles outside the trophy modes get no trophy fields.
fn enrich_battles(
    battles: &[RawBattle],
    trophies: &HashMap<String, TrophyRecord>,
) -> Vec<EnrichedBattle> {
    battles
        .iter()
        .map(|battle| {
            let record = trophies.get(&battle.id);
            EnrichedBattle {
                trophies_before: record.map(TrophyRecord::trophies_before),
                trophies_after: record.map(|r| r.trophies_after),
                variation: record.map(|r| r.variation),
                matchup: battle.win_chance.map(|p| p * 100.0),
                battle: battle.clone(),
            }
        })
        .collect()
}
