use anyhow::Result;
use is_terminal::IsTerminal;
use ladderlens_store::Database;
use owo_colors::OwoColorize;

use crate::args::OutputFormat;

pub fn handle(db: &Database, limit: usize, format: OutputFormat) -> Result<()> {
    let players = db.list_players(Some(limit))?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players stored. Run 'ladderlens store import <dir>' first.");
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    for player in &players {
        let battles = db.count_battles_for_player(&player.tag)?;
        let name = player.name.as_deref().unwrap_or("-");
        let tag = if color {
            player.tag.bold().to_string()
        } else {
            player.tag.clone()
        };
        println!(
            "{:<14} {:>6} trophies {:>6} battles  {}",
            tag, player.trophies, battles, name
        );
    }

    Ok(())
}
