mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ladderlens")]
#[command(about = "Reconstruct play sessions and behavioral profiles from ladder battle logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory; defaults to LADDERLENS_PATH or the platform data dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
