use std::path::{Path, PathBuf};

use anyhow::Result;
use ladderlens_store::Database;
use ladderlens_types::ModeFilter;

use super::args::{Cli, Commands, ModeFilterArg, PlayerCommand, StoreCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        return show_guidance(&data_dir);
    };

    let config = Config::load_from(&data_dir.join("config.toml"))?;

    match command {
        Commands::Init => handlers::init::handle(&data_dir),

        Commands::Store { command } => {
            let mut db = open_database(&data_dir)?;
            match command {
                StoreCommand::Import { path } => handlers::import::handle(&mut db, &path),
                StoreCommand::Vacuum => {
                    db.vacuum()?;
                    println!("Database vacuumed successfully");
                    Ok(())
                }
            }
        }

        Commands::Player { command } => {
            let db = open_database(&data_dir)?;
            match command {
                PlayerCommand::List { limit } => {
                    handlers::player_list::handle(&db, limit, cli.format)
                }
                PlayerCommand::Show { tag } => handlers::player_show::handle(&db, &tag, cli.format),
            }
        }

        Commands::Profile { tag, mode_filter } => {
            let db = open_database(&data_dir)?;
            let filter = effective_filter(mode_filter, &config);
            handlers::profile::handle(&db, &tag, filter, cli.format)
        }

        Commands::Sessions {
            tag,
            mode_filter,
            limit,
        } => {
            let db = open_database(&data_dir)?;
            let filter = effective_filter(mode_filter, &config);
            handlers::sessions::handle(&db, &tag, filter, limit, cli.format)
        }

        Commands::Export {
            output,
            mode_filter,
            exclude_unreliable,
        } => {
            let db = open_database(&data_dir)?;
            let filter = effective_filter(mode_filter, &config);
            let exclude = exclude_unreliable || config.exclude_unreliable;
            handlers::export::handle(&db, &output, filter, exclude)
        }
    }
}

fn effective_filter(flag: Option<ModeFilterArg>, config: &Config) -> ModeFilter {
    flag.map(ModeFilter::from).unwrap_or(config.mode_filter)
}

fn open_database(data_dir: &Path) -> Result<Database> {
    let db_path = data_dir.join("ladderlens.db");
    if !db_path.exists() {
        anyhow::bail!(
            "no database at {}. Run 'ladderlens init' first.",
            db_path.display()
        );
    }
    Ok(Database::open(&db_path)?)
}

fn show_guidance(data_dir: &PathBuf) -> Result<()> {
    let config_exists = data_dir.join("config.toml").exists();
    let db_exists = data_dir.join("ladderlens.db").exists();

    println!("ladderlens - Battle-log session and profile reconstruction\n");

    if !config_exists || !db_exists {
        println!("Get started:");
        println!("  ladderlens init\n");
        println!("The init command will:");
        println!("  1. Create the data directory and default config");
        println!("  2. Set up the database");
        println!("  3. Show where to put scraped battle dumps\n");
    } else {
        println!("Quick commands:");
        println!("  ladderlens store import <dir>     # Load scraped battle dumps");
        println!("  ladderlens player list            # View stored players");
        println!("  ladderlens profile <tag>          # Reconstruct one player");
        println!("  ladderlens export --output f.csv  # Profile everyone\n");
    }

    println!("For more commands:");
    println!("  ladderlens --help");

    Ok(())
}
