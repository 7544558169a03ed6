use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::ResponseSet;
use super::trial::TrialResult;

/// In-progress answers for one respondent, as persisted by a caller
/// between page views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub instrument_id: String,
    #[serde(default)]
    pub responses: ResponseSet,
    #[serde(default)]
    pub trials: Vec<TrialResult>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Session {
    pub fn new(instrument_id: impl Into<String>, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.into(),
            responses: ResponseSet::new(),
            trials: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record(&mut self, item_id: impl Into<String>, value: i32, now: jiff::Timestamp) {
        self.responses.record(item_id, value);
        self.updated_at = now;
    }

    pub fn record_trial(&mut self, trial: TrialResult, now: jiff::Timestamp) {
        self.trials.push(trial);
        self.updated_at = now;
    }
}
