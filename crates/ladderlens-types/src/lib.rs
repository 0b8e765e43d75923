// Core domain types for ladderlens
// Schemas only - reconstruction logic lives in ladderlens-engine

mod battle;
mod profile;
mod session;

pub use battle::{GameMode, ModeFilter, RawBattle};
pub use profile::{PlayerProfile, PlayerSessions};
pub use session::{EnrichedBattle, Session, SessionAnalysis, StopType, TrophyRecord};
