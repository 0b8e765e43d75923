use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ladderlens_types::ModeFilter;
use serde::{Deserialize, Serialize};

/// Resolve the data directory path based on priority:
/// 1. Explicit --data-dir flag (with tilde expansion)
/// 2. LADDERLENS_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.ladderlens (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LADDERLENS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("ladderlens"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".ladderlens"));
    }

    bail!("could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Defaults for the read commands; flags override these per invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Battle-mode filter applied before segmentation.
    #[serde(default)]
    pub mode_filter: ModeFilter,
    /// Whether exports drop profiles flagged as unreliable.
    #[serde(default)]
    pub exclude_unreliable: bool,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
