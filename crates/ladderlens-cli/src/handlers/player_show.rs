use anyhow::Result;
use ladderlens_store::Database;

use crate::args::OutputFormat;

pub fn handle(db: &Database, tag: &str, format: OutputFormat) -> Result<()> {
    let Some(player) = db.get_player(tag)? else {
        anyhow::bail!("no player '{}' in the store", tag);
    };
    let battles = db.count_battles_for_player(tag)?;

    if format == OutputFormat::Json {
        let value = serde_json::json!({
            "player": player,
            "battle_count": battles,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Player {}", player.tag);
    println!("  name:        {}", player.name.as_deref().unwrap_or("-"));
    println!("  trophies:    {}", player.trophies);
    println!(
        "  nationality: {}",
        player.nationality.as_deref().unwrap_or("-")
    );
    println!("  battles:     {}", battles);
    if let Some(seen) = &player.last_seen_at {
        println!("  last import: {}", seen);
    }

    Ok(())
}
