use std::path::Path;

use anyhow::Result;
use ladderlens_store::{Database, import_dumps};

pub fn handle(db: &mut Database, path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("dump directory {} does not exist", path.display());
    }

    let report = import_dumps(db, path)?;

    println!(
        "Imported {} battles across {} players",
        report.battles, report.players
    );

    for (path, reason) in &report.skipped {
        eprintln!("Warning: skipped {}: {}", path.display(), reason);
    }

    Ok(())
}
