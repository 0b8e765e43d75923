use std::path::PathBuf;

use clap::Subcommand;

use super::enums::ModeFilterArg;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the data directory, config, and database")]
    Init,

    #[command(about = "Manage the battle store")]
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },

    #[command(about = "Inspect stored players")]
    Player {
        #[command(subcommand)]
        command: PlayerCommand,
    },

    #[command(about = "Reconstruct one player's sessions and behavioral profile")]
    Profile {
        tag: String,

        #[arg(long, help = "Battle-mode filter; defaults to the config value")]
        mode_filter: Option<ModeFilterArg>,
    },

    #[command(about = "List one player's reconstructed play sessions")]
    Sessions {
        tag: String,

        #[arg(long)]
        mode_filter: Option<ModeFilterArg>,

        #[arg(long, default_value = "50")]
        limit: usize,
    },

    #[command(about = "Export every player's profile as CSV")]
    Export {
        #[arg(long)]
        output: PathBuf,

        #[arg(long)]
        mode_filter: Option<ModeFilterArg>,

        #[arg(long, help = "Drop profiles whose sample is too small to trust")]
        exclude_unreliable: bool,
    },
}

#[derive(Subcommand)]
pub enum StoreCommand {
    #[command(about = "Import scraped player battle-log dumps from a directory")]
    Import { path: PathBuf },

    #[command(about = "Optimize the database by reclaiming unused space")]
    Vacuum,
}

#[derive(Subcommand)]
pub enum PlayerCommand {
    #[command(about = "List stored players")]
    List {
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    #[command(about = "Show one stored player")]
    Show { tag: String },
}
