use anyhow::Result;
use is_terminal::IsTerminal;
use ladderlens_engine::build_player_sessions;
use ladderlens_store::Database;
use ladderlens_types::ModeFilter;
use owo_colors::OwoColorize;

use crate::args::OutputFormat;

pub fn handle(db: &Database, tag: &str, filter: ModeFilter, format: OutputFormat) -> Result<()> {
    let Some(player) = db.get_player(tag)? else {
        anyhow::bail!("no player '{}' in the store", tag);
    };

    let battles = db.load_player_battles(tag)?;
    let result = build_player_sessions(tag, &battles, player.trophies, filter);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let Some(profile) = &result.profile else {
        println!("No battles for '{}' under mode filter '{}'", tag, filter);
        return Ok(());
    };

    println!("Player {} (mode filter: {})", tag, filter);
    println!(
        "  battles:            {} across {} sessions",
        profile.tot_battles, profile.n_sessions
    );
    println!("  matches/session:    {:.2}", profile.matches_per_session);
    println!("  avg session:        {:.1} min", profile.avg_session_min);
    println!("  avg matchup:        {:.1}%", profile.avg_matchup_pct);
    println!("  max loss streak:    {}", profile.max_loss_streak);
    println!(
        "  win continuation:   {:.1}%",
        profile.win_continuation_rate * 100.0
    );
    println!(
        "  loss continuation:  {:.1}%",
        profile.loss_continuation_rate * 100.0
    );
    println!("  FSI:                {:.4}", profile.fsi);
    println!("  ERS:                {:.4}", profile.ers);
    println!("  quit impulsivity:   {:.4}", profile.quit_impulsivity);

    let color = std::io::stdout().is_terminal();
    let reliable = match (profile.is_reliable, color) {
        (true, true) => "yes".green().to_string(),
        (true, false) => "yes".to_string(),
        (false, true) => "no (small sample)".yellow().to_string(),
        (false, false) => "no (small sample)".to_string(),
    };
    println!("  reliable:           {}", reliable);

    Ok(())
}
