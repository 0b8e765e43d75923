use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use ladderlens_engine::build_player_sessions;
use ladderlens_store::Database;
use ladderlens_types::{ModeFilter, PlayerProfile};
use serde::Serialize;

/// One CSV row per profiled player - the flat feed downstream
/// hypothesis-test tooling reads.
#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    tag: &'a str,
    tot_battles: usize,
    n_sessions: usize,
    fsi: f64,
    ers: f64,
    quit_impulsivity: f64,
    avg_session_min: f64,
    matches_per_session: f64,
    max_loss_streak: u32,
    win_continuation_rate: f64,
    loss_continuation_rate: f64,
    streak_continuation_rate: f64,
    avg_matchup_pct: f64,
    is_reliable: bool,
}

impl<'a> ProfileRow<'a> {
    fn new(tag: &'a str, profile: &PlayerProfile) -> Self {
        Self {
            tag,
            tot_battles: profile.tot_battles,
            n_sessions: profile.n_sessions,
            fsi: profile.fsi,
            ers: profile.ers,
            quit_impulsivity: profile.quit_impulsivity,
            avg_session_min: profile.avg_session_min,
            matches_per_session: profile.matches_per_session,
            max_loss_streak: profile.max_loss_streak,
            win_continuation_rate: profile.win_continuation_rate,
            loss_continuation_rate: profile.loss_continuation_rate,
            streak_continuation_rate: profile.streak_continuation_rate,
            avg_matchup_pct: profile.avg_matchup_pct,
            is_reliable: profile.is_reliable,
        }
    }
}

pub fn handle(
    db: &Database,
    output: &Path,
    filter: ModeFilter,
    exclude_unreliable: bool,
) -> Result<()> {
    let players = db.list_players(None)?;

    let mut writer =
        Writer::from_path(output).with_context(|| format!("failed to create {}", output.display()))?;

    let mut written = 0usize;
    let mut skipped = 0usize;
    for player in &players {
        let battles = db.load_player_battles(&player.tag)?;
        let result = build_player_sessions(&player.tag, &battles, player.trophies, filter);

        let Some(profile) = &result.profile else {
            skipped += 1;
            continue;
        };
        if exclude_unreliable && !profile.is_reliable {
            skipped += 1;
            continue;
        }

        writer.serialize(ProfileRow::new(&player.tag, profile))?;
        written += 1;
    }
    writer.flush()?;

    println!(
        "Wrote {} profiles to {} ({} skipped)",
        written,
        output.display(),
        skipped
    );

    Ok(())
}
