// NOTE: CLI Architecture Rationale
//
// Why a store-then-derive split (not derive-at-import)?
// - The trophy anchor moves with every scrape; derived sessions and
//   profiles go stale the moment a new dump lands
// - Recomputing per read keeps the store dumb and the engine pure:
//   rows in, value objects out, nothing cached to invalidate
// - Profiling a full store is cheap (hundreds of battles per player)
//
// Why namespaced subcommands (not flat)?
// - `store import` / `player list` / `profile` group by what they touch
// - Mirrors how people talk about the tool: load data, look at data,
//   run the reconstruction

mod args;
mod commands;
pub mod config;
mod handlers;

pub use args::{Cli, Commands, ModeFilterArg, OutputFormat, PlayerCommand, StoreCommand};
pub use commands::run;
