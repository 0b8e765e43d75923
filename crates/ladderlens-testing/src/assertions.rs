//! Custom assertions for ladderlens-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Float closeness with a diagnostic message
//! - Session partition checks against the source battle list

use anyhow::Result;
use ladderlens_types::Session;

/// Assert two floats agree within `eps`.
pub fn assert_close(actual: f64, expected: f64, eps: f64) -> Result<()> {
    if (actual - expected).abs() > eps {
        anyhow::bail!("expected {expected} +/- {eps}, got {actual}");
    }
    Ok(())
}

/// Assert that concatenating the sessions' battles yields exactly
/// `expected_ids`, in order: nothing dropped, duplicated, or reordered.
pub fn assert_partition(sessions: &[Session], expected_ids: &[String]) -> Result<()> {
    let flattened: Vec<&str> = sessions
        .iter()
        .flat_map(|s| s.battles.iter().map(|b| b.battle.id.as_str()))
        .collect();
    let expected: Vec<&str> = expected_ids.iter().map(String::as_str).collect();

    if flattened != expected {
        anyhow::bail!(
            "sessions do not partition the input: expected {:?}, got {:?}",
            expected,
            flattened
        );
    }

    for (i, session) in sessions.iter().enumerate() {
        if session.battles.is_empty() {
            anyhow::bail!("session {} is empty", i);
        }
    }

    Ok(())
}
