use anyhow::Result;
use ladderlens_engine::build_player_sessions;
use ladderlens_store::Database;
use ladderlens_types::ModeFilter;

use crate::args::OutputFormat;

pub fn handle(
    db: &Database,
    tag: &str,
    filter: ModeFilter,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let Some(player) = db.get_player(tag)? else {
        anyhow::bail!("no player '{}' in the store", tag);
    };

    let battles = db.load_player_battles(tag)?;
    let result = build_player_sessions(tag, &battles, player.trophies, filter);

    if format == OutputFormat::Json {
        let shown: Vec<_> = result.sessions.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if result.sessions.is_empty() {
        println!("No sessions for '{}' under mode filter '{}'", tag, filter);
        return Ok(());
    }

    println!(
        "{} sessions for {} (mode filter: {})",
        result.sessions.len(),
        tag,
        filter
    );
    for (i, session) in result.sessions.iter().take(limit).enumerate() {
        let analysis = &session.analysis;
        let start = session
            .start_time()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let gap = session
            .duration
            .map(|secs| format!("next in {}", format_gap(secs)))
            .unwrap_or_else(|| "latest".to_string());

        println!(
            "#{:<3} {}  {:>3} battles  win {:>5.1}%  matchup {:>5.1}  stop {:<5} ({})",
            i,
            start,
            analysis.tot_battles,
            analysis.win_rate * 100.0,
            analysis.avg_matchup,
            session.stop_type.as_str(),
            gap
        );
    }

    if result.sessions.len() > limit {
        println!("... {} more (raise --limit)", result.sessions.len() - limit);
    }

    Ok(())
}

/// Format a gap length for display: "25 min", "3 h", "2 days".
fn format_gap(secs: i64) -> String {
    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86_400;

    if minutes < 120 {
        format!("{} min", minutes)
    } else if hours < 48 {
        format!("{} h", hours)
    } else {
        format!("{} days", days)
    }
}
