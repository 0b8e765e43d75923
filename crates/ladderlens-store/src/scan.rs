use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use ladderlens_types::RawBattle;

use crate::Database;
use crate::records::{BattleRecord, PlayerRecord};

/// One scraped player dump: the player's stored facts plus the battle
/// log extracted from their public match-history pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDump {
    pub tag: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Current trophy balance at scrape time.
    pub trophies: i32,
    #[serde(default)]
    pub nationality: Option<String>,
    pub battles: Vec<RawBattle>,
}

/// Outcome of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub players: usize,
    pub battles: usize,
    /// Files that could not be imported, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Import every `*.json` player dump under `root`.
///
/// A malformed file lands in the report's skip list and the rest of the
/// batch keeps going; one bad dump must never cost a whole scrape run.
pub fn import_dumps(db: &mut Database, root: &Path) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match import_dump_file(db, path) {
            Ok(count) => {
                report.players += 1;
                report.battles += count;
            }
            Err(err) => report.skipped.push((path.to_path_buf(), format!("{err:#}"))),
        }
    }

    Ok(report)
}

fn import_dump_file(db: &mut Database, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let dump: PlayerDump = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    db.upsert_player(&PlayerRecord {
        tag: dump.tag.clone(),
        name: dump.name.clone(),
        trophies: dump.trophies,
        nationality: dump.nationality.clone(),
        last_seen_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    })?;

    let records: Vec<BattleRecord> = dump
        .battles
        .iter()
        .map(|battle| BattleRecord::from_raw(&dump.tag, battle))
        .collect();
    db.insert_battles(&records)?;

    Ok(records.len())
}
