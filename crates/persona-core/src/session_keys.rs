//! Storage key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the session bucket.

use uuid::Uuid;

pub const SESSIONS_PREFIX: &str = "sessions/";

pub fn session(instrument_id: &str, id: Uuid) -> String {
    format!("sessions/{instrument_id}/{id}.json")
}

pub fn instrument_sessions_prefix(instrument_id: &str) -> String {
    format!("sessions/{instrument_id}/")
}

pub fn report(instrument_id: &str, id: Uuid) -> String {
    format!("reports/{instrument_id}/{id}.json")
}

/// Parse the session id back out of a key produced by [`session`].
pub fn session_id_from_key(key: &str) -> Option<Uuid> {
    let file = key.rsplit('/').next()?;
    let stem = file.strip_suffix(".json")?;
    Uuid::parse_str(stem).ok()
}
