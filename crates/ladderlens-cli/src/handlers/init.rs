use std::path::Path;

use anyhow::{Context, Result};
use ladderlens_store::Database;

use crate::config::Config;

pub fn handle(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let config_path = data_dir.join("config.toml");
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
        println!("Wrote {}", config_path.display());
    }

    let db_path = data_dir.join("ladderlens.db");
    Database::open(&db_path)?;
    println!("Database ready at {}", db_path.display());

    println!("\nNext steps:");
    println!("  ladderlens store import <dir>     # load scraped battle dumps");
    println!("  ladderlens player list            # see what landed");
    println!("  ladderlens profile <tag>          # reconstruct one player");

    Ok(())
}
