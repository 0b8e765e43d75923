use ladderlens_types::{EnrichedBattle, Session, StopType};

use crate::analysis::analyze_session;

/// Gap below which two battles belong to the same session: 20 minutes.
pub const SHORT_STOP_SECS: i64 = 20 * 60;
/// Gap from which a stop counts as a long break: 2 hours.
pub const LONG_STOP_SECS: i64 = 2 * 60 * 60;
/// Gap from which a stop counts as quitting for the day: 20 hours.
pub const QUIT_STOP_SECS: i64 = 20 * 60 * 60;

/// Split a chronological battle list into play sessions.
///
/// Mode filtering happens before this point; gaps are measured between
/// adjacent battles of the list as given. Every battle ends up in
/// exactly one session, in its original position, so concatenating the
/// sessions reproduces the input.
///
/// Each session's analysis is computed here, at close time - the
/// profiler reads it and must never see a session without one.
pub fn segment_sessions(battles: Vec<EnrichedBattle>) -> Vec<Session> {
    let mut sessions = Vec::new();
    let mut buffer: Vec<EnrichedBattle> = Vec::new();

    for battle in battles {
        if let Some(prev) = buffer.last() {
            let gap = (battle.timestamp() - prev.timestamp()).num_seconds();
            if gap >= SHORT_STOP_SECS {
                let stop_type = classify_gap(gap);
                sessions.push(close_session(
                    std::mem::take(&mut buffer),
                    stop_type,
                    Some(gap),
                ));
            }
        }
        buffer.push(battle);
    }

    if !buffer.is_empty() {
        sessions.push(close_session(buffer, StopType::End, None));
    }

    sessions
}

fn classify_gap(gap: i64) -> StopType {
    if gap >= QUIT_STOP_SECS {
        StopType::Quit
    } else if gap >= LONG_STOP_SECS {
        StopType::Long
    } else {
        StopType::Short
    }
}

fn close_session(
    battles: Vec<EnrichedBattle>,
    stop_type: StopType,
    duration: Option<i64>,
) -> Session {
    let analysis = analyze_session(&battles);
    Session {
        battles,
        stop_type,
        duration,
        analysis,
    }
}
